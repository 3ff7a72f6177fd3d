use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::token_io::delete_token;
use crate::tui::app::{App, ConfirmAction, RecordsTab, Screen};
use crate::tui::nav::NavEvent;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            if let Some(state) = app.confirm.take() {
                execute_confirm(app, state.action);
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
        }
        _ => {}
    }
}

fn execute_confirm(app: &mut App, action: ConfirmAction) {
    match action {
        ConfirmAction::DeleteToken => match delete_token(&app.data_dir) {
            Ok(_) => {
                app.token_present = false;
                app.notify_success("Token deleted");
                app.navigate(NavEvent::TokenDeleted);
            }
            Err(e) => app.notify_error(format!("Could not delete the token: {e}")),
        },
        ConfirmAction::DeleteTask { id } => {
            if let Screen::Tasks(state) = &mut app.screen {
                state.tasks.retain(|t| t.id != id);
                if state.detail == Some(id) {
                    state.detail = None;
                }
                state.clamp_cursor();
            }
            app.notify_success("Task deleted");
        }
        ConfirmAction::DeleteRecord { tab, id } => {
            if let Screen::Records(state) = &mut app.screen {
                match tab {
                    RecordsTab::Groups => state.groups.retain(|g| g.id != id),
                    RecordsTab::Posts => state.posts.retain(|p| p.id != id),
                    RecordsTab::Categories => state.categories.retain(|c| c.id != id),
                    RecordsTab::Tokens => state.tokens.retain(|t| t.id != id),
                }
                state.clamp_cursor();
            }
            app.notify_success("Record deleted");
        }
    }
}
