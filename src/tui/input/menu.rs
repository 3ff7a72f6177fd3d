use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, MENU_ENTRIES, MENU_TOKEN_ROW, Screen};
use crate::tui::nav::{NavEvent, ScreenKind};

pub(super) fn handle_menu(app: &mut App, key: KeyEvent) {
    let Screen::Menu(state) = &mut app.screen else {
        return;
    };

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.cursor = state.cursor.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            state.cursor = (state.cursor + 1).min(MENU_TOKEN_ROW);
        }
        KeyCode::Enter => {
            let target = if state.cursor == MENU_TOKEN_ROW {
                ScreenKind::Token
            } else {
                MENU_ENTRIES[state.cursor].kind
            };
            app.navigate(NavEvent::Open(target));
        }
        // Number shortcuts mirror the row order
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            app.navigate(NavEvent::Open(MENU_ENTRIES[idx].kind));
        }
        KeyCode::Char('t') => app.navigate(NavEvent::Open(ScreenKind::Token)),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
