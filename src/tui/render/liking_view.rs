use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, LikeTarget, LikingState};

use super::pacing_view::render_pacing;
use super::picker::render_picker;

/// Render the liking wizard. Step one carries the object-kind toggle
/// above the picker; step two is the usual pacing form.
pub fn render_liking_view(frame: &mut Frame, app: &App, state: &LikingState, area: Rect) {
    if state.step != 0 {
        let summary = match state.target {
            LikeTarget::Groups => format!(
                "{} of {} communities",
                state.groups.selected_count(),
                state.groups.len(),
            ),
            LikeTarget::Users => format!(
                "{} of {} users",
                state.users.selected_count(),
                state.users.len(),
            ),
        };
        render_pacing(frame, app, &state.pacing, state.pacing_focus, &summary, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // kind toggle
            Constraint::Min(1),    // picker
        ])
        .split(area);

    render_kind_row(frame, app, state.target, chunks[0]);

    match state.target {
        LikeTarget::Groups => render_picker(
            frame,
            app,
            &state.groups,
            state.cursor,
            state.search_focus,
            "Like posts in communities",
            chunks[1],
        ),
        LikeTarget::Users => render_picker(
            frame,
            app,
            &state.users,
            state.cursor,
            state.search_focus,
            "Like posts of users",
            chunks[1],
        ),
    }
}

fn render_kind_row(frame: &mut Frame, app: &App, target: LikeTarget, area: Rect) {
    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let option = |label: &str, current: bool| -> Span<'static> {
        if current {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.selection_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), dim_style)
        }
    };

    let line = Line::from(vec![
        Span::styled(" objects:", dim_style),
        option("community posts", target == LikeTarget::Groups),
        option("user posts", target == LikeTarget::Users),
    ]);
    let paragraph = Paragraph::new(vec![Line::from(""), line]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Screen;
    use crate::tui::nav::ScreenKind;
    use crate::tui::render::test_helpers::{TERM_W, app_on, render_to_string};

    fn liking_output(app: &App) -> String {
        let Screen::Liking(state) = &app.screen else {
            panic!("expected liking screen");
        };
        render_to_string(TERM_W, 20, |frame, area| {
            render_liking_view(frame, app, state, area);
        })
    }

    #[test]
    fn group_kind_lists_communities() {
        let out = liking_output(&app_on(ScreenKind::Liking));
        assert!(out.contains("objects: community posts  user posts"));
        assert!(out.contains("Like posts in communities"));
        assert!(out.contains("Группа 1"));
    }

    #[test]
    fn user_kind_lists_full_names_without_categories() {
        let mut app = app_on(ScreenKind::Liking);
        if let Screen::Liking(state) = &mut app.screen {
            state.toggle_target();
        }
        let out = liking_output(&app);
        assert!(out.contains("Like posts of users"));
        assert!(out.contains("Иван Иванов"));
        assert!(out.contains("Петр Петров"));
        // User rows carry no category facet
        assert!(!out.contains("Маркетинг"));
    }

    #[test]
    fn pacing_step_recaps_the_chosen_kind() {
        let mut app = app_on(ScreenKind::Liking);
        if let Screen::Liking(state) = &mut app.screen {
            state.groups.toggle("2");
            state.step = 1;
        }
        let out = liking_output(&app);
        assert!(out.contains("1 of 2 communities"));
    }
}
