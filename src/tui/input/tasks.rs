use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, ConfirmAction, ConfirmState, Screen};
use crate::tui::nav::NavEvent;

pub(super) fn handle_tasks(app: &mut App, key: KeyEvent) {
    let Screen::Tasks(state) = &mut app.screen else {
        return;
    };

    // The detail popup swallows keys until closed
    if state.detail.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            state.detail = None;
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.cursor = state.cursor.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            if !state.tasks.is_empty() {
                state.cursor = (state.cursor + 1).min(state.tasks.len() - 1);
            }
        }
        KeyCode::Enter => {
            if let Some(task) = state.tasks.get(state.cursor) {
                state.detail = Some(task.id);
            }
        }
        KeyCode::Char('s') => {
            if let Some(task) = state.tasks.get_mut(state.cursor)
                && task.start()
            {
                app.notify_success("Task started");
            }
        }
        KeyCode::Char('x') => {
            if let Some(task) = state.tasks.get_mut(state.cursor)
                && task.stop()
            {
                app.notify_success("Task stopped");
            }
        }
        KeyCode::Char('d') => {
            if let Some(task) = state.tasks.get(state.cursor) {
                app.confirm = Some(ConfirmState {
                    action: ConfirmAction::DeleteTask { id: task.id },
                    message: format!("Delete task \"{}\"?", task.kind),
                });
            }
        }
        KeyCode::Esc => app.navigate(NavEvent::Back),
        _ => {}
    }
}
