use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::LogKind;
use crate::tui::app::{App, TasksState};
use crate::util::unicode;

use super::helpers::{centered_rect_fixed, progress_bar};

fn log_marker(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Success => "\u{2713}",
        LogKind::Pause => "\u{00B7}",
        LogKind::Error => "\u{2717}",
    }
}

/// Render the execution detail popup for the task selected in the monitor.
pub fn render_detail_popup(frame: &mut Frame, app: &App, state: &TasksState, area: Rect) {
    let task = match state
        .detail
        .and_then(|id| state.tasks.iter().find(|t| t.id == id))
    {
        Some(task) => task,
        None => return,
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let status_style = Style::default()
        .fg(app.theme.status_color(task.status))
        .bg(bg);

    let popup_w: u16 = 56.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(" {}", unicode::truncate_to_width(&task.kind, inner_w.saturating_sub(1))),
        header_style,
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("  status:   ", dim_style),
        Span::styled(format!("{:<10}", task.status.label()), status_style),
        Span::styled("started ", dim_style),
        Span::styled(task.started_at.clone(), text_style),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  progress: ", dim_style),
        Span::styled(
            progress_bar(task.progress, 20),
            Style::default().fg(app.theme.green).bg(bg),
        ),
        Span::styled(format!(" {:>3}%", task.progress), text_style),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("  Execution log", dim_style)));
    for entry in &state.log {
        let marker_style = Style::default().fg(app.theme.log_color(entry.kind)).bg(bg);
        let message = unicode::truncate_to_width(&entry.message, inner_w.saturating_sub(14));
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", entry.time), dim_style),
            Span::styled(log_marker(entry.kind), marker_style),
            Span::styled(format!(" {}", message), text_style),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("  Esc", dim_style),
        Span::styled(" close", text_style),
    ]));

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
