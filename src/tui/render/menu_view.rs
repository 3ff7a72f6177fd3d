use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, MENU_ENTRIES, MENU_TOKEN_ROW, MenuState};

use super::helpers::spans_width;

/// Render the dashboard menu: six numbered entries plus the token row.
pub fn render_menu_view(frame: &mut Frame, app: &App, state: &MenuState, area: Rect) {
    let bg = app.theme.background;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    for (i, entry) in MENU_ENTRIES.iter().enumerate() {
        lines.push(menu_line(
            app,
            &format!("{}", i + 1),
            entry.title,
            entry.description,
            state.cursor == i,
            area.width,
        ));
    }

    lines.push(Line::from(""));
    lines.push(menu_line(
        app,
        "t",
        "Access token",
        "Replace or delete the saved token",
        state.cursor == MENU_TOKEN_ROW,
        area.width,
    ));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn menu_line<'a>(
    app: &App,
    key: &str,
    title: &str,
    description: &str,
    is_cursor: bool,
    width: u16,
) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled("  ", Style::default().bg(bg)));
    spans.push(Span::styled(
        format!("{} ", key),
        Style::default().fg(app.theme.purple).bg(bg),
    ));
    spans.push(Span::styled(
        format!("{:<18}", title),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        description.to_string(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    if is_cursor {
        let used = spans_width(&spans);
        let w = width as usize;
        if used < w {
            spans.push(Span::styled(" ".repeat(w - used), Style::default().bg(bg)));
        }
    }
    Line::from(spans)
}
