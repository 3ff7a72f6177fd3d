use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Candidate, SelectionList};

/// Keys shared by every selection step of the wizards: search, cursor
/// movement, toggling and the category facet. Returns true when the key
/// was consumed. Enter and Esc outside the search box are left to the
/// caller, which owns step transitions.
pub(super) fn handle_picker_key<T: Candidate>(
    list: &mut SelectionList<T>,
    cursor: &mut usize,
    search_focus: &mut bool,
    key: KeyEvent,
) -> bool {
    if *search_focus {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => *search_focus = false,
            KeyCode::Backspace => {
                list.search.pop();
                clamp_cursor(list, cursor);
            }
            KeyCode::Up => move_cursor(list, cursor, -1),
            KeyCode::Down => move_cursor(list, cursor, 1),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                list.search.push(c);
                clamp_cursor(list, cursor);
            }
            _ => {}
        }
        return true;
    }

    match key.code {
        KeyCode::Char('/') => *search_focus = true,
        KeyCode::Up | KeyCode::Char('k') => move_cursor(list, cursor, -1),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(list, cursor, 1),
        KeyCode::Char(' ') => list.toggle_visible(*cursor),
        KeyCode::Char('a') => list.select_all(),
        KeyCode::Char('n') => list.clear_selection(),
        KeyCode::Char('c') => {
            list.cycle_filter();
            clamp_cursor(list, cursor);
        }
        _ => return false,
    }
    true
}

fn move_cursor<T: Candidate>(list: &SelectionList<T>, cursor: &mut usize, delta: i32) {
    let len = list.visible_len();
    if len == 0 {
        *cursor = 0;
    } else if delta < 0 {
        *cursor = cursor.saturating_sub(1);
    } else {
        *cursor = (*cursor + 1).min(len - 1);
    }
}

fn clamp_cursor<T: Candidate>(list: &SelectionList<T>, cursor: &mut usize) {
    let len = list.visible_len();
    if len == 0 {
        *cursor = 0;
    } else {
        *cursor = (*cursor).min(len - 1);
    }
}
