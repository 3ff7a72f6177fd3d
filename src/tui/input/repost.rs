use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Screen};
use crate::tui::nav::NavEvent;

use super::*;

pub(super) fn handle_repost(app: &mut App, key: KeyEvent) {
    let Screen::Repost(state) = &mut app.screen else {
        return;
    };

    let consumed = match state.step {
        0 => handle_picker_key(
            &mut state.donors,
            &mut state.cursor,
            &mut state.search_focus,
            key,
        ),
        1 => handle_picker_key(
            &mut state.targets,
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
                if state.donors.any_selected() {
                    state.targets.search = state.donors.search.clone();
                    state.targets.filter = state.donors.filter.clone();
                    state.step = 1;
                    state.cursor = 0;
                } else {
                    app.notify_error("Select at least one donor community");
                }
            }
            1 => {
                if state.targets.any_selected() {
                    state.step = 2;
                } else {
                    app.notify_error("Select at least one target community");
                }
            }
            _ => {
                if !(state.donors.any_selected() && state.targets.any_selected()) {
                    app.notify_error("Select donor and target groups");
                    return;
                }
                match state.pacing.validate() {
                    Ok(_) => {
                        app.notify_success("Repost task created");
                        app.navigate(NavEvent::Submitted);
                    }
                    Err(e) => app.notify_error(e.to_string()),
                }
            }
        },
        KeyCode::Esc => match state.step {
            0 => app.navigate(NavEvent::Back),
            1 => {
                state.donors.search = state.targets.search.clone();
                state.donors.filter = state.targets.filter.clone();
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
    use crate::tui::app::NoticeKind;
    use crate::tui::nav::ScreenKind;
    use crossterm::event::KeyModifiers;
    use std::path::PathBuf;

    fn repost_app() -> App {
        let mut app = App::new(PathBuf::from("/tmp/vkdeck-test"), &AppConfig::default());
        app.token_present = true;
        app.screen = Screen::fresh(ScreenKind::Repost);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_repost(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn donors_and_targets_are_separate_lists() {
        let mut app = repost_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        let Screen::Repost(state) = &app.screen else {
            panic!("expected repost screen");
        };
        assert_eq!(state.step, 1);
        assert!(state.donors.any_selected());
        // The donor pick does not leak into the target list
        assert!(!state.targets.any_selected());
    }

    #[test]
    fn full_walk_creates_a_repost_task() {
        let mut app = repost_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "Repost task created");
        assert_eq!(app.screen.kind(), ScreenKind::Menu);
    }

    #[test]
    fn target_step_blocks_without_a_pick() {
        let mut app = repost_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let Screen::Repost(state) = &app.screen else {
            panic!("expected repost screen");
        };
        assert_eq!(state.step, 1);
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }
}
