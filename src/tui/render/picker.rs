use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Candidate, SelectionList};
use crate::tui::app::App;

use super::helpers::{checkbox, search_regex, spans_width};
use super::push_highlighted_spans;

/// Render one selection step of a wizard: a prompt, the search box, the
/// filtered candidate rows and a selection summary. Selection counts come
/// from the full list, so the summary can exceed the rows on screen.
pub(super) fn render_picker<T: Candidate>(
    frame: &mut Frame,
    app: &App,
    list: &SelectionList<T>,
    cursor: usize,
    search_focus: bool,
    prompt: &str,
    area: Rect,
) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", prompt),
        bright_style.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    // Search box
    {
        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(" search: ", dim_style));
        if !list.search.is_empty() {
            let style = if search_focus { bright_style } else { text_style };
            spans.push(Span::styled(list.search.clone(), style));
        }
        if search_focus {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    let visible = list.visible();
    let search_re = search_regex(&list.search);

    if visible.is_empty() {
        lines.push(Line::from(Span::styled(" Nothing matches", dim_style)));
    }

    for (pos, &idx) in visible.iter().enumerate() {
        let entry = &list.items()[idx];
        let is_cursor = pos == cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled("  ", Style::default().bg(row_bg)));

        let mark_color = if entry.selected {
            app.theme.green
        } else {
            app.theme.dim
        };
        spans.push(Span::styled(
            checkbox(entry.selected),
            Style::default().fg(mark_color).bg(row_bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));

        let name_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
        let hl_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);
        push_highlighted_spans(
            &mut spans,
            &entry.item.search_text(),
            name_style,
            hl_style,
            search_re.as_ref(),
        );

        if let Some(category) = entry.item.category() {
            spans.push(Span::styled(
                format!("  {}", category),
                Style::default().fg(app.theme.cyan).bg(row_bg),
            ));
        }

        if is_cursor {
            let used = spans_width(&spans);
            let w = area.width as usize;
            if used < w {
                spans.push(Span::styled(
                    " ".repeat(w - used),
                    Style::default().bg(row_bg),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let selected = list.selected_count();
    let count_style = if selected > 0 {
        Style::default().fg(app.theme.green).bg(bg)
    } else {
        dim_style
    };
    lines.push(Line::from(Span::styled(
        format!(" {} of {} selected", selected, list.len()),
        count_style,
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
