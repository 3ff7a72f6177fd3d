use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, EditPayload, EditState, RecordsState};
use crate::tui::form::TextField;

use super::helpers::{centered_rect_fixed, input_spans};

/// Render the record edit popup. Saving never touches the table rows;
/// the popup exists so every record type has an edit affordance.
pub fn render_edit_popup(
    frame: &mut Frame,
    app: &App,
    state: &RecordsState,
    edit: &EditState,
    area: Rect,
) {
    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let title = match edit.payload {
        EditPayload::Group { .. } => " Edit community",
        EditPayload::Post { .. } => " Edit post",
        EditPayload::Category { .. } => " Edit category",
        EditPayload::Token { .. } => " Edit token",
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(title, header_style)));
    lines.push(Line::from(""));

    match &edit.payload {
        EditPayload::Group { name, category, .. } => {
            lines.push(field_row(app, "name", name, edit.focus == 0));
            let label = state
                .categories
                .get(*category)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "(none)".to_string());
            let value_style = if edit.focus == 1 {
                Style::default().fg(app.theme.text_bright).bg(bg)
            } else {
                text_style
            };
            let mut spans = row_prefix(app, "category", edit.focus == 1);
            spans.push(Span::styled(label, value_style));
            lines.push(Line::from(spans));
        }
        EditPayload::Post { text, .. } => {
            lines.push(field_row(app, "text", text, true));
        }
        EditPayload::Category { name, .. } => {
            lines.push(field_row(app, "name", name, true));
        }
        EditPayload::Token { token, .. } => {
            lines.push(field_row(app, "token", token, true));
        }
    }

    lines.push(Line::from(""));
    let mut hints = vec![
        Span::styled("  Enter", dim_style),
        Span::styled(" save  ", text_style),
        Span::styled("Esc", dim_style),
        Span::styled(" cancel", text_style),
    ];
    if matches!(edit.payload, EditPayload::Group { .. }) {
        hints.push(Span::styled("  Tab", dim_style));
        hints.push(Span::styled(" field", text_style));
    }
    lines.push(Line::from(hints));

    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn field_row<'a>(app: &App, label: &str, field: &TextField, focused: bool) -> Line<'a> {
    let mut spans = row_prefix(app, label, focused);
    spans.extend(input_spans(&app.theme, field, focused, false));
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
            format!("{:<10}", format!("{}:", label)),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]
}
