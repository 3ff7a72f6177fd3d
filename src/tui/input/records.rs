use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{
    App, ConfirmAction, ConfirmState, EditPayload, EditState, RecordsState, RecordsTab, Screen,
};
use crate::tui::form::TextField;
use crate::tui::nav::NavEvent;

use super::*;

pub(super) fn handle_records(app: &mut App, key: KeyEvent) {
    let Screen::Records(state) = &mut app.screen else {
        return;
    };

    if state.edit.is_some() {
        handle_edit_popup(app, key);
        return;
    }

    if state.search_focus {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => state.search_focus = false,
            KeyCode::Backspace => {
                state.search.pop();
                state.clamp_cursor();
            }
            KeyCode::Up => state.cursor = state.cursor.saturating_sub(1),
            KeyCode::Down => {
                let count = state.row_count();
                if count > 0 {
                    state.cursor = (state.cursor + 1).min(count - 1);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.search.push(c);
                state.clamp_cursor();
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            state.tab = state.tab.next();
            state.cursor = 0;
        }
        KeyCode::BackTab => {
            state.tab = state.tab.prev();
            state.cursor = 0;
        }
        KeyCode::Up | KeyCode::Char('k') => state.cursor = state.cursor.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            let count = state.row_count();
            if count > 0 {
                state.cursor = (state.cursor + 1).min(count - 1);
            }
        }
        // Search and the category facet exist on the groups tab only
        KeyCode::Char('/') if state.tab == RecordsTab::Groups => state.search_focus = true,
        KeyCode::Char('c') if state.tab == RecordsTab::Groups => {
            state.cycle_filter();
            state.clamp_cursor();
        }
        KeyCode::Char('e') => open_edit(state),
        KeyCode::Char('d') => {
            let target = delete_target(state);
            if let Some((id, message)) = target {
                app.confirm = Some(ConfirmState {
                    action: ConfirmAction::DeleteRecord {
                        tab: state.tab,
                        id,
                    },
                    message,
                });
            }
        }
        KeyCode::Esc => app.navigate(NavEvent::Back),
        _ => {}
    }
}

/// Row under the cursor, resolved through the groups filter when needed.
fn delete_target(state: &RecordsState) -> Option<(String, String)> {
    match state.tab {
        RecordsTab::Groups => {
            let idx = *state.visible_groups().get(state.cursor)?;
            let group = &state.groups[idx];
            Some((group.id.clone(), format!("Delete \"{}\"?", group.name)))
        }
        RecordsTab::Posts => {
            let post = state.posts.get(state.cursor)?;
            Some((post.id.clone(), "Delete this post?".to_string()))
        }
        RecordsTab::Categories => {
            let cat = state.categories.get(state.cursor)?;
            Some((cat.id.clone(), format!("Delete \"{}\"?", cat.name)))
        }
        RecordsTab::Tokens => {
            let token = state.tokens.get(state.cursor)?;
            Some((token.id.clone(), "Delete this token?".to_string()))
        }
    }
}

fn open_edit(state: &mut RecordsState) {
    let payload = match state.tab {
        RecordsTab::Groups => {
            let visible = state.visible_groups();
            let Some(&idx) = visible.get(state.cursor) else {
                return;
            };
            let group = &state.groups[idx];
            let category = state
                .categories
                .iter()
                .position(|c| c.name == group.category)
                .unwrap_or(0);
            EditPayload::Group {
                id: group.id.clone(),
                name: TextField::with_value(&group.name),
                category,
            }
        }
        RecordsTab::Posts => {
            let Some(post) = state.posts.get(state.cursor) else {
                return;
            };
            EditPayload::Post {
                id: post.id.clone(),
                text: TextField::with_value(&post.text),
            }
        }
        RecordsTab::Categories => {
            let Some(cat) = state.categories.get(state.cursor) else {
                return;
            };
            EditPayload::Category {
                id: cat.id.clone(),
                name: TextField::with_value(&cat.name),
            }
        }
        RecordsTab::Tokens => {
            let Some(token) = state.tokens.get(state.cursor) else {
                return;
            };
            EditPayload::Token {
                id: token.id.clone(),
                token: TextField::with_value(&token.token),
            }
        }
    };
    state.edit = Some(EditState { payload, focus: 0 });
}

fn handle_edit_popup(app: &mut App, key: KeyEvent) {
    let Screen::Records(state) = &mut app.screen else {
        return;
    };
    let options = state.categories.len();
    let Some(edit) = &mut state.edit else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            state.edit = None;
        }
        // Saving closes the dialog; the table keeps its rows as they are
        KeyCode::Enter => {
            state.edit = None;
            app.notify_success("Changes saved");
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if matches!(edit.payload, EditPayload::Group { .. }) {
                edit.focus = (edit.focus + 1) % 2;
            }
        }
        _ => match &mut edit.payload {
            EditPayload::Group { name, category, .. } => {
                if edit.focus == 0 {
                    edit_text_field(name, key);
                } else if options > 0 {
                    match key.code {
                        KeyCode::Char(' ') | KeyCode::Right => {
                            *category = (*category + 1) % options;
                        }
                        KeyCode::Left => *category = (*category + options - 1) % options,
                        _ => {}
                    }
                }
            }
            EditPayload::Post { text, .. } => {
                edit_text_field(text, key);
            }
            EditPayload::Category { name, .. } => {
                edit_text_field(name, key);
            }
            EditPayload::Token { token, .. } => {
                edit_text_field(token, key);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryFilter;
    use crate::model::config::AppConfig;
    use crate::tui::nav::ScreenKind;
    use std::path::PathBuf;

    fn records_app() -> App {
        let mut app = App::new(PathBuf::from("/tmp/vkdeck-test"), &AppConfig::default());
        app.token_present = true;
        app.screen = Screen::fresh(ScreenKind::Records);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_records(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn state(app: &mut App) -> &mut RecordsState {
        match &mut app.screen {
            Screen::Records(s) => s,
            _ => panic!("expected records screen"),
        }
    }

    #[test]
    fn tab_cycles_tables_and_resets_the_cursor() {
        let mut app = records_app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(state(&mut app).cursor, 1);
        press(&mut app, KeyCode::Tab);
        assert_eq!(state(&mut app).tab, RecordsTab::Posts);
        assert_eq!(state(&mut app).cursor, 0);
    }

    #[test]
    fn search_narrows_the_groups_tab() {
        let mut app = records_app();
        press(&mut app, KeyCode::Char('/'));
        for c in "группа 2".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(state(&mut app).visible_groups().len(), 1);
        press(&mut app, KeyCode::Esc);
        assert!(!state(&mut app).search_focus);
        // Esc left the search box, not the screen
        assert_eq!(app.screen.kind(), ScreenKind::Records);
    }

    #[test]
    fn saving_an_edit_keeps_the_row_unchanged() {
        let mut app = records_app();
        press(&mut app, KeyCode::Char('e'));
        assert!(state(&mut app).edit.is_some());

        // Retype the name inside the dialog
        for c in " !!!".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(state(&mut app).edit.is_none());
        assert_eq!(app.notice.as_ref().unwrap().text, "Changes saved");
        assert_eq!(state(&mut app).groups[0].name, "Группа 1");
    }

    #[test]
    fn edit_dialog_seeds_fields_from_the_row() {
        let mut app = records_app();
        press(&mut app, KeyCode::Char('e'));
        match &state(&mut app).edit.as_ref().unwrap().payload {
            EditPayload::Group { name, category, .. } => {
                assert_eq!(name.value, "Группа 1");
                // Position of "Маркетинг" in the categories table
                assert_eq!(*category, 0);
            }
            _ => panic!("expected a group payload"),
        }
    }

    #[test]
    fn deleting_a_record_goes_through_confirmation() {
        let mut app = records_app();
        press(&mut app, KeyCode::Char('d'));
        let confirm = app.confirm.as_ref().unwrap();
        assert_eq!(
            confirm.action,
            ConfirmAction::DeleteRecord {
                tab: RecordsTab::Groups,
                id: "1".into(),
            }
        );
        assert_eq!(state(&mut app).groups.len(), 2);
    }

    #[test]
    fn delete_resolves_the_row_through_the_facet() {
        let mut app = records_app();
        state(&mut app).filter = CategoryFilter::Only("IT".into());
        press(&mut app, KeyCode::Char('d'));
        // Visible row 0 under the IT facet is "Группа 2"
        assert_eq!(
            app.confirm.as_ref().unwrap().action,
            ConfirmAction::DeleteRecord {
                tab: RecordsTab::Groups,
                id: "2".into(),
            }
        );
    }

    #[test]
    fn token_rows_only_edit_and_delete() {
        let mut app = records_app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(state(&mut app).tab, RecordsTab::Tokens);
        press(&mut app, KeyCode::Char('e'));
        match &state(&mut app).edit.as_ref().unwrap().payload {
            EditPayload::Token { token, .. } => {
                assert_eq!(token.value, "vk1.a.***************");
            }
            _ => panic!("expected a token payload"),
        }
    }
}
