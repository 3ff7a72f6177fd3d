use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::form::TextField;

/// Single-line field editing shared by every form on every screen.
/// Returns true when the key moved or changed the field.
pub(super) fn edit_text_field(field: &mut TextField, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Left if ctrl => field.word_left(),
        KeyCode::Right if ctrl => field.word_right(),
        KeyCode::Left => field.left(),
        KeyCode::Right => field.right(),
        KeyCode::Home => field.home(),
        KeyCode::End => field.end(),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Char(c) if !ctrl => field.insert_char(c),
        _ => return false,
    }
    true
}
