use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{PacingDraft, StartPolicy};
use crate::tui::app::{App, PacingField};
use crate::tui::input::pacing_fields;

/// Render the pacing and schedule form of a wizard. `summary` recaps what
/// the earlier steps picked so the submit screen is self-contained.
pub(super) fn render_pacing(
    frame: &mut Frame,
    app: &App,
    draft: &PacingDraft,
    focus: PacingField,
    summary: &str,
    area: Rect,
) {
    let bg = app.theme.background;
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Pacing and start",
        bright_style.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(format!(" {}", summary), dim_style)));
    lines.push(Line::from(""));

    for field in pacing_fields(draft) {
        lines.push(field_line(app, draft, *field, focus == *field));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn field_line<'a>(app: &App, draft: &PacingDraft, field: PacingField, focused: bool) -> Line<'a> {
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = if focused {
        Style::default().fg(app.theme.text_bright).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let (label, value, is_text) = match field {
        PacingField::Min => ("min pause", draft.min_pause.clone(), true),
        PacingField::Max => ("max pause", draft.max_pause.clone(), true),
        PacingField::Unit => ("unit", draft.unit.label().to_string(), false),
        PacingField::Start => (
            "start",
            match draft.start {
                StartPolicy::Immediate => "immediately".to_string(),
                StartPolicy::Scheduled => "at a set time".to_string(),
            },
            false,
        ),
        PacingField::Date => ("date", draft.date.clone(), true),
        PacingField::Time => ("time", draft.time.clone(), true),
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        if focused { " \u{25B8} " } else { "   " },
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    spans.push(Span::styled(format!("{:<11}", format!("{}:", label)), label_style));

    if value.is_empty() && is_text {
        let hint = match field {
            PacingField::Date => "YYYY-MM-DD",
            PacingField::Time => "HH:MM",
            _ => "",
        };
        if !hint.is_empty() && !focused {
            spans.push(Span::styled(hint, label_style));
        }
    } else {
        spans.push(Span::styled(value, value_style));
    }

    // Text fields append at the end; the cursor always sits there
    if focused && is_text {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }

    Line::from(spans)
}
