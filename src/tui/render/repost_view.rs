use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::app::{App, RepostState};

use super::pacing_view::render_pacing;
use super::picker::render_picker;

/// Render the repost wizard: donor communities, targets, then pacing.
pub fn render_repost_view(frame: &mut Frame, app: &App, state: &RepostState, area: Rect) {
    match state.step {
        0 => render_picker(
            frame,
            app,
            &state.donors,
            state.cursor,
            state.search_focus,
            "Repost from",
            area,
        ),
        1 => render_picker(
            frame,
            app,
            &state.targets,
            state.cursor,
            state.search_focus,
            "Repost to",
            area,
        ),
        _ => {
            let summary = format!(
                "{} of {} donors, {} of {} targets",
                state.donors.selected_count(),
                state.donors.len(),
                state.targets.selected_count(),
                state.targets.len(),
            );
            render_pacing(frame, app, &state.pacing, state.pacing_focus, &summary, area);
        }
    }
}
