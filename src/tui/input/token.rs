use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::token_io::{load_token, save_token, token_is_valid};
use crate::tui::app::{App, ConfirmAction, ConfirmState, Screen};
use crate::tui::nav::NavEvent;

use super::*;

pub(super) fn handle_token(app: &mut App, key: KeyEvent) {
    let Screen::Token(state) = &mut app.screen else {
        return;
    };

    match (key.modifiers, key.code) {
        // Load the stored token into the field for editing
        (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            if let Some(stored) = load_token(&app.data_dir) {
                state.field.set(&stored.token);
            } else {
                app.notify_error("No saved token to edit");
            }
        }
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
            if app.token_present {
                app.confirm = Some(ConfirmState {
                    action: ConfirmAction::DeleteToken,
                    message: "Delete the saved token?".to_string(),
                });
            }
        }
        (_, KeyCode::Enter) => {
            let value = state.field.value.clone();
            if !token_is_valid(&value) {
                app.notify_error("Invalid token. Enter a valid access token");
                return;
            }
            match save_token(&app.data_dir, &value) {
                Ok(_) => {
                    app.token_present = true;
                    app.notify_success("Token saved");
                    app.navigate(NavEvent::TokenSaved);
                }
                Err(e) => app.notify_error(format!("Could not save the token: {e}")),
            }
        }
        // Leaving is only possible once a token exists; nav enforces that
        (_, KeyCode::Esc) => app.navigate(NavEvent::Back),
        _ => {
            edit_text_field(&mut state.field, key);
        }
    }
}
