use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::POST_TEXT_LIMIT;
use crate::tui::app::{App, DataEntryState, EntryTab};
use crate::tui::form::TextField;

use super::helpers::input_spans;

/// Render the add-record form for the active tab. Nothing here persists;
/// a successful submit clears the form and raises a notice.
pub fn render_data_entry_view(frame: &mut Frame, app: &App, state: &DataEntryState, area: Rect) {
    let bg = app.theme.background;
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    let title = match state.tab {
        EntryTab::Groups => " Add a community",
        EntryTab::Posts => " Add a post",
        EntryTab::Categories => " Add a category",
    };
    lines.push(Line::from(Span::styled(
        title,
        bright_style.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    match state.tab {
        EntryTab::Groups => {
            lines.push(text_row(app, "vk id*", &state.group_vk_id, state.focus == 0));
            lines.push(text_row(app, "name*", &state.group_name, state.focus == 1));
            lines.push(select_row(
                app,
                "category",
                state.group_category,
                &state.categories,
                state.focus == 2,
            ));
            lines.push(text_row(app, "members", &state.group_members, state.focus == 3));
        }
        EntryTab::Posts => {
            let mut row = text_row(app, "text*", &state.post_text, state.focus == 0);
            row.spans.push(Span::styled(
                format!("  {}/{}", state.post_text.value.chars().count(), POST_TEXT_LIMIT),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
            lines.push(row);
            lines.push(text_row(app, "media url", &state.post_media_url, state.focus == 1));
            lines.push(select_row(
                app,
                "category",
                state.post_category,
                &state.categories,
                state.focus == 2,
            ));
        }
        EntryTab::Categories => {
            lines.push(text_row(app, "name*", &state.category_name, state.focus == 0));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn text_row<'a>(app: &App, label: &str, field: &TextField, focused: bool) -> Line<'a> {
    let mut spans = row_prefix(app, label, focused);
    spans.extend(input_spans(&app.theme, field, focused, false));
    Line::from(spans)
}

fn select_row<'a>(
    app: &App,
    label: &str,
    selected: Option<usize>,
    options: &[String],
    focused: bool,
) -> Line<'a> {
    let bg = app.theme.background;
    let mut spans = row_prefix(app, label, focused);
    match selected.and_then(|i| options.get(i)) {
        Some(name) => {
            let style = if focused {
                Style::default().fg(app.theme.text_bright).bg(bg)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            spans.push(Span::styled(name.clone(), style));
        }
        None => {
            spans.push(Span::styled(
                "(none)",
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }
    Line::from(spans)
}

fn row_prefix<'a>(app: &App, label: &str, focused: bool) -> Vec<Span<'a>> {
    let bg = app.theme.background;
    vec![
        Span::styled(
            if focused { " \u{25B8} " } else { "   " },
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(
            format!("{:<11}", format!("{}:", label)),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]
}
