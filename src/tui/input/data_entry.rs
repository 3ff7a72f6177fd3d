use crossterm::event::{KeyCode, KeyEvent};

use crate::model::POST_TEXT_LIMIT;
use crate::tui::app::{App, DataEntryState, EntryTab, Screen};
use crate::tui::nav::NavEvent;

use super::*;

pub(super) fn handle_data_entry(app: &mut App, key: KeyEvent) {
    let Screen::DataEntry(state) = &mut app.screen else {
        return;
    };

    match key.code {
        KeyCode::Tab => {
            state.tab = state.tab.next();
            state.focus = 0;
            return;
        }
        KeyCode::BackTab => {
            state.tab = state.tab.prev();
            state.focus = 0;
            return;
        }
        KeyCode::Up => {
            state.focus = state.focus.saturating_sub(1);
            return;
        }
        KeyCode::Down => {
            state.focus = (state.focus + 1).min(state.tab.field_count() - 1);
            return;
        }
        KeyCode::Enter => {
            match submit(state) {
                Ok(msg) => app.notify_success(msg),
                Err(msg) => app.notify_error(msg),
            }
            return;
        }
        KeyCode::Esc => {
            app.navigate(NavEvent::Back);
            return;
        }
        _ => {}
    }

    // Category rows are selects: space or arrows walk the options
    if matches!(
        (state.tab, state.focus),
        (EntryTab::Groups, 2) | (EntryTab::Posts, 2)
    ) {
        let options = state.categories.len();
        let slot = match state.tab {
            EntryTab::Groups => &mut state.group_category,
            _ => &mut state.post_category,
        };
        match key.code {
            KeyCode::Char(' ') | KeyCode::Right => *slot = next_option(*slot, options),
            KeyCode::Left => *slot = prev_option(*slot, options),
            _ => {}
        }
        return;
    }

    // The member count only takes digits; the post body has a hard cap
    if state.tab == EntryTab::Groups
        && state.focus == 3
        && matches!(key.code, KeyCode::Char(c) if !c.is_ascii_digit())
    {
        return;
    }
    if state.tab == EntryTab::Posts
        && state.focus == 0
        && matches!(key.code, KeyCode::Char(_))
        && state.post_text.value.chars().count() >= POST_TEXT_LIMIT
    {
        return;
    }

    let field = match (state.tab, state.focus) {
        (EntryTab::Groups, 0) => &mut state.group_vk_id,
        (EntryTab::Groups, 1) => &mut state.group_name,
        (EntryTab::Groups, _) => &mut state.group_members,
        (EntryTab::Posts, 0) => &mut state.post_text,
        (EntryTab::Posts, _) => &mut state.post_media_url,
        (EntryTab::Categories, _) => &mut state.category_name,
    };
    edit_text_field(field, key);
}

/// Walk an optional select forward: unset, then each option, then unset.
fn next_option(current: Option<usize>, options: usize) -> Option<usize> {
    match current {
        None if options > 0 => Some(0),
        Some(i) if i + 1 < options => Some(i + 1),
        _ => None,
    }
}

fn prev_option(current: Option<usize>, options: usize) -> Option<usize> {
    match current {
        Some(0) => None,
        Some(i) => Some(i - 1),
        None if options > 0 => Some(options - 1),
        None => None,
    }
}

fn submit(state: &mut DataEntryState) -> Result<&'static str, &'static str> {
    match state.tab {
        EntryTab::Groups => {
            if state.group_vk_id.is_empty() || state.group_name.is_empty() {
                Err("Fill in the required fields")
            } else {
                state.reset_group_form();
                Ok("Group added")
            }
        }
        EntryTab::Posts => {
            if state.post_text.is_empty() {
                Err("Enter the post text")
            } else {
                state.reset_post_form();
                Ok("Post added")
            }
        }
        EntryTab::Categories => {
            if state.category_name.is_empty() {
                Err("Enter the category name")
            } else {
                state.category_name.clear();
                Ok("Category added")
            }
        }
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

    fn entry_app() -> App {
        let mut app = App::new(PathBuf::from("/tmp/vkdeck-test"), &AppConfig::default());
        app.token_present = true;
        app.screen = Screen::fresh(ScreenKind::DataEntry);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_data_entry(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn state(app: &mut App) -> &mut DataEntryState {
        match &mut app.screen {
            Screen::DataEntry(s) => s,
            _ => panic!("expected data entry screen"),
        }
    }

    #[test]
    fn group_form_requires_id_and_name() {
        let mut app = entry_app();
        type_text(&mut app, "12345");
        press(&mut app, KeyCode::Enter);
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Fill in the required fields");

        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Новая группа");
        press(&mut app, KeyCode::Enter);
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "Group added");

        // Successful submit resets the form
        assert!(state(&mut app).group_vk_id.is_empty());
        assert!(state(&mut app).group_name.is_empty());
    }

    #[test]
    fn member_count_only_accepts_digits() {
        let mut app = entry_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "5a0b00");
        assert_eq!(state(&mut app).group_members.value, "5000");
    }

    #[test]
    fn category_select_cycles_through_unset() {
        let mut app = entry_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(state(&mut app).group_category, None);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(state(&mut app).group_category, Some(0));
        press(&mut app, KeyCode::Left);
        assert_eq!(state(&mut app).group_category, None);
        press(&mut app, KeyCode::Left);
        // Wraps to the last option
        assert_eq!(state(&mut app).group_category, Some(3));
    }

    #[test]
    fn post_form_requires_text() {
        let mut app = entry_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice.as_ref().unwrap().text, "Enter the post text");

        type_text(&mut app, "Специальная акция");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice.as_ref().unwrap().text, "Post added");
        assert!(state(&mut app).post_text.is_empty());
    }

    #[test]
    fn category_form_requires_a_name() {
        let mut app = entry_app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(state(&mut app).tab, EntryTab::Categories);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.notice.as_ref().unwrap().text,
            "Enter the category name"
        );

        type_text(&mut app, "Акции");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice.as_ref().unwrap().text, "Category added");
    }

    #[test]
    fn option_walk_helpers_wrap() {
        assert_eq!(next_option(None, 2), Some(0));
        assert_eq!(next_option(Some(1), 2), None);
        assert_eq!(prev_option(None, 2), Some(1));
        assert_eq!(prev_option(Some(0), 2), None);
        assert_eq!(next_option(None, 0), None);
        assert_eq!(prev_option(None, 0), None);
    }
}
