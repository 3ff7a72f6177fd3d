use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::app::{App, PublishState};

use super::pacing_view::render_pacing;
use super::picker::render_picker;

/// Render the publishing wizard: groups, posts, then pacing.
pub fn render_publish_view(frame: &mut Frame, app: &App, state: &PublishState, area: Rect) {
    match state.step {
        0 => render_picker(
            frame,
            app,
            &state.groups,
            state.cursor,
            state.search_focus,
            "Where to publish",
            area,
        ),
        1 => render_picker(
            frame,
            app,
            &state.posts,
            state.cursor,
            state.search_focus,
            "What to publish",
            area,
        ),
        _ => {
            let summary = format!(
                "{} of {} communities, {} of {} posts",
                state.groups.selected_count(),
                state.groups.len(),
                state.posts.selected_count(),
                state.posts.len(),
            );
            render_pacing(frame, app, &state.pacing, state.pacing_focus, &summary, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Screen;
    use crate::tui::nav::ScreenKind;
    use crate::tui::render::test_helpers::{TERM_W, app_on, render_to_string};

    fn publish_output(app: &App) -> String {
        let Screen::Publish(state) = &app.screen else {
            panic!("expected publish screen");
        };
        render_to_string(TERM_W, 20, |frame, area| {
            render_publish_view(frame, app, state, area);
        })
    }

    #[test]
    fn first_step_lists_the_seed_groups() {
        let out = publish_output(&app_on(ScreenKind::Publish));
        assert!(out.contains("Where to publish"));
        assert!(out.contains("Группа 1"));
        assert!(out.contains("Группа 3"));
        assert!(out.contains("0 of 3 selected"));
    }

    #[test]
    fn second_step_lists_the_seed_posts() {
        let mut app = app_on(ScreenKind::Publish);
        if let Screen::Publish(state) = &mut app.screen {
            state.step = 1;
        }
        let out = publish_output(&app);
        assert!(out.contains("What to publish"));
        assert!(out.contains("Отличное предложение для вас!"));
    }

    #[test]
    fn pacing_step_recaps_the_selection() {
        let mut app = app_on(ScreenKind::Publish);
        if let Screen::Publish(state) = &mut app.screen {
            state.groups.toggle("1");
            state.groups.toggle("2");
            state.posts.toggle("3");
            state.step = 2;
        }
        let out = publish_output(&app);
        assert!(out.contains("Pacing and start"));
        assert!(out.contains("2 of 3 communities, 1 of 3 posts"));
    }
}
