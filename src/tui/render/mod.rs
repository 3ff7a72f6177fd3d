pub mod confirm_popup;
pub mod data_entry_view;
pub mod detail_popup;
pub mod edit_popup;
pub mod header;
pub mod helpers;
pub mod liking_view;
pub mod menu_view;
pub mod pacing_view;
pub mod picker;
pub mod publish_view;
pub mod records_view;
pub mod repost_view;
pub mod status_row;
pub mod tasks_view;
pub mod token_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::{App, Screen};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);

    match &app.screen {
        Screen::Token(state) => token_view::render_token_view(frame, app, state, chunks[1]),
        Screen::Menu(state) => menu_view::render_menu_view(frame, app, state, chunks[1]),
        Screen::Publish(state) => publish_view::render_publish_view(frame, app, state, chunks[1]),
        Screen::Repost(state) => repost_view::render_repost_view(frame, app, state, chunks[1]),
        Screen::Liking(state) => liking_view::render_liking_view(frame, app, state, chunks[1]),
        Screen::DataEntry(state) => {
            data_entry_view::render_data_entry_view(frame, app, state, chunks[1])
        }
        Screen::Tasks(state) => tasks_view::render_tasks_view(frame, app, state, chunks[1]),
        Screen::Records(state) => records_view::render_records_view(frame, app, state, chunks[1]),
    }

    // Popups stack on top of the content
    if let Screen::Records(state) = &app.screen
        && let Some(edit) = &state.edit
    {
        edit_popup::render_edit_popup(frame, app, state, edit, frame.area());
    }
    if let Screen::Tasks(state) = &app.screen
        && state.detail.is_some()
    {
        detail_popup::render_detail_popup(frame, app, state, frame.area());
    }

    // Confirmation popup (rendered on top of everything)
    if app.confirm.is_some() {
        confirm_popup::render_confirm_popup(frame, app, frame.area());
    }

    // Status row
    status_row::render_status_row(frame, app, chunks[2]);
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
