use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Screen};
use crate::tui::nav::NavEvent;

use super::*;

pub(super) fn handle_publish(app: &mut App, key: KeyEvent) {
    let Screen::Publish(state) = &mut app.screen else {
        return;
    };

    let consumed = match state.step {
        0 => handle_picker_key(
            &mut state.groups,
            &mut state.cursor,
            &mut state.search_focus,
            key,
        ),
        1 => handle_picker_key(
            &mut state.posts,
            &mut state.cursor,
            &mut state.search_focus,
            key,
        ),
        _ => handle_pacing_key(&mut state.pacing, &mut state.pacing_focus, key),
    };
    if consumed {
        return;
    }

    match key.code {
        KeyCode::Enter => match state.step {
            0 => {
                if state.groups.any_selected() {
                    // Search and facet carry over to the posts step
                    state.posts.search = state.groups.search.clone();
                    state.posts.filter = state.groups.filter.clone();
                    state.step = 1;
                    state.cursor = 0;
                } else {
                    app.notify_error("Select at least one group");
                }
            }
            1 => {
                if state.posts.any_selected() {
                    state.step = 2;
                } else {
                    app.notify_error("Select at least one post");
                }
            }
            _ => {
                if !(state.groups.any_selected() && state.posts.any_selected()) {
                    app.notify_error("Select groups and posts first");
                    return;
                }
                match state.pacing.validate() {
                    Ok(_) => {
                        app.notify_success("Task created");
                        app.navigate(NavEvent::Submitted);
                    }
                    Err(e) => app.notify_error(e.to_string()),
                }
            }
        },
        KeyCode::Esc => match state.step {
            0 => app.navigate(NavEvent::Back),
            1 => {
                state.groups.search = state.posts.search.clone();
                state.groups.filter = state.posts.filter.clone();
                state.step = 0;
                state.cursor = 0;
            }
            _ => {
                state.step = 1;
                state.cursor = 0;
            }
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;
    use crate::model::{CategoryFilter, DraftError};
    use crate::tui::app::NoticeKind;
    use crate::tui::nav::ScreenKind;
    use crossterm::event::KeyModifiers;
    use std::path::PathBuf;

    fn publish_app() -> App {
        let mut app = App::new(PathBuf::from("/tmp/vkdeck-test"), &AppConfig::default());
        app.token_present = true;
        app.screen = Screen::fresh(ScreenKind::Publish);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_publish(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn state(app: &mut App) -> &mut crate::tui::app::PublishState {
        match &mut app.screen {
            Screen::Publish(s) => s,
            _ => panic!("expected publish screen"),
        }
    }

    #[test]
    fn advancing_requires_a_selection() {
        let mut app = publish_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(state(&mut app).step, 0);
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Error);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert_eq!(state(&mut app).step, 1);
    }

    #[test]
    fn search_and_facet_travel_between_steps() {
        let mut app = publish_app();
        state(&mut app).groups.filter = CategoryFilter::Only("Маркетинг".into());
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            state(&mut app).posts.filter,
            CategoryFilter::Only("Маркетинг".into())
        );

        // Changing the facet on the posts step and stepping back keeps it
        state(&mut app).posts.filter = CategoryFilter::All;
        press(&mut app, KeyCode::Esc);
        assert_eq!(state(&mut app).step, 0);
        assert_eq!(state(&mut app).groups.filter, CategoryFilter::All);
    }

    #[test]
    fn full_walk_creates_a_task_and_returns_to_the_menu() {
        let mut app = publish_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert_eq!(state(&mut app).step, 2);

        press(&mut app, KeyCode::Enter);
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "Task created");
        assert_eq!(app.screen.kind(), ScreenKind::Menu);
    }

    #[test]
    fn bad_pacing_blocks_the_submit() {
        let mut app = publish_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        state(&mut app).pacing.min_pause = "90".into();
        state(&mut app).pacing.max_pause = "60".into();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen.kind(), ScreenKind::Publish);
        assert_eq!(
            app.notice.as_ref().unwrap().text,
            DraftError::PauseOrder.to_string()
        );
    }

    #[test]
    fn esc_from_the_first_step_returns_to_the_menu() {
        let mut app = publish_app();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen.kind(), ScreenKind::Menu);
    }
}
