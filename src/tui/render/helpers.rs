use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use regex::Regex;

use crate::tui::form::TextField;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Selection symbols for picker rows (markdown checkbox style)
pub(super) fn checkbox(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

/// Progress cells for the task table, e.g. "████░░░░░░" for 40%.
pub(super) fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (width * percent.min(100) as usize) / 100;
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('\u{2588}');
    }
    for _ in filled..width {
        bar.push('\u{2591}');
    }
    bar
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Case-insensitive matcher for highlighting the search text in rows.
/// Falls back to no highlighting when the box is empty.
pub(super) fn search_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

/// Value spans for a single-line input, with a block cursor when focused.
pub(super) fn input_spans<'a>(
    theme: &Theme,
    field: &TextField,
    focused: bool,
    masked: bool,
) -> Vec<Span<'a>> {
    let bg = theme.background;
    let value_style = if focused {
        Style::default().fg(theme.text_bright).bg(bg)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let cursor_style = Style::default().fg(theme.highlight).bg(bg);

    let display = |s: &str| -> String {
        if masked {
            "\u{2022}".repeat(s.chars().count())
        } else {
            s.to_string()
        }
    };

    if !focused {
        return vec![Span::styled(display(&field.value), value_style)];
    }

    let before = &field.value[..field.cursor];
    let after = &field.value[field.cursor..];
    let mut spans = Vec::new();
    if !before.is_empty() {
        spans.push(Span::styled(display(before), value_style));
    }
    spans.push(Span::styled("\u{258C}", cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(display(after), value_style));
    }
    spans
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
