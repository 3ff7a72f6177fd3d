use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, LikeTarget, Screen};
use crate::tui::nav::NavEvent;

use super::*;

pub(super) fn handle_liking(app: &mut App, key: KeyEvent) {
    let Screen::Liking(state) = &mut app.screen else {
        return;
    };

    let consumed = match (state.step, state.target) {
        (0, LikeTarget::Groups) => handle_picker_key(
            &mut state.groups,
            &mut state.cursor,
            &mut state.search_focus,
            key,
        ),
        (0, LikeTarget::Users) => handle_picker_key(
            &mut state.users,
            &mut state.cursor,
            &mut state.search_focus,
            key,
        ),
        _ => handle_pacing_key(&mut state.pacing, &mut state.pacing_focus, key),
    };
    if consumed {
        return;
    }

    let picked = match state.target {
        LikeTarget::Groups => state.groups.any_selected(),
        LikeTarget::Users => state.users.any_selected(),
    };

    match key.code {
        KeyCode::Char('t') if state.step == 0 => state.toggle_target(),
        KeyCode::Enter => match state.step {
            0 => {
                if picked {
                    state.step = 1;
                } else {
                    app.notify_error("Select objects to like");
                }
            }
            _ => {
                if !picked {
                    app.notify_error("Select objects to like");
                    return;
                }
                match state.pacing.validate() {
                    Ok(_) => {
                        app.notify_success("Liking task created");
                        app.navigate(NavEvent::Submitted);
                    }
                    Err(e) => app.notify_error(e.to_string()),
                }
            }
        },
        KeyCode::Esc => match state.step {
            0 => app.navigate(NavEvent::Back),
            _ => {
                state.step = 0;
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

    fn liking_app() -> App {
        let mut app = App::new(PathBuf::from("/tmp/vkdeck-test"), &AppConfig::default());
        app.token_present = true;
        app.screen = Screen::fresh(ScreenKind::Liking);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_liking(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn state(app: &mut App) -> &mut crate::tui::app::LikingState {
        match &mut app.screen {
            Screen::Liking(s) => s,
            _ => panic!("expected liking screen"),
        }
    }

    #[test]
    fn t_switches_between_groups_and_users() {
        let mut app = liking_app();
        assert_eq!(state(&mut app).target, LikeTarget::Groups);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(state(&mut app).target, LikeTarget::Users);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(state(&mut app).target, LikeTarget::Groups);
    }

    #[test]
    fn t_types_into_a_focused_search_box() {
        let mut app = liking_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(state(&mut app).target, LikeTarget::Groups);
        assert_eq!(state(&mut app).groups.search, "t");
    }

    #[test]
    fn gate_follows_the_active_kind() {
        let mut app = liking_app();
        // Pick a group, then switch to users: the gate now looks at users
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(state(&mut app).step, 0);
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Error);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert_eq!(state(&mut app).step, 1);
    }

    #[test]
    fn full_walk_creates_a_liking_task() {
        let mut app = liking_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.text, "Liking task created");
        assert_eq!(app.screen.kind(), ScreenKind::Menu);
    }
}
