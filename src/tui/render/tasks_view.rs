use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::AutomationTask;
use crate::tui::app::{App, TasksState};
use crate::util::unicode;

use super::helpers::{progress_bar, spans_width};

const KIND_COL: usize = 22;
const BAR_W: usize = 10;

/// Render the task monitor table. Rows come from the seed; start/stop
/// only flip the status column and nothing ever advances progress.
pub fn render_tasks_view(frame: &mut Frame, app: &App, state: &TasksState, area: Rect) {
    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    if state.tasks.is_empty() {
        lines.push(Line::from(Span::styled(" No tasks", dim_style)));
        let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    // Column header
    lines.push(Line::from(Span::styled(
        format!(
            "  {:<kind$}  {:<9}  {:<bar$}       {}",
            "task",
            "status",
            "progress",
            "started",
            kind = KIND_COL,
            bar = BAR_W,
        ),
        dim_style,
    )));
    lines.push(Line::from(""));

    for (i, task) in state.tasks.iter().enumerate() {
        lines.push(task_line(app, task, i == state.cursor, area.width));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn task_line<'a>(app: &App, task: &AutomationTask, is_cursor: bool, width: u16) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let kind = unicode::truncate_to_width(&task.kind, KIND_COL);
    let pad = KIND_COL.saturating_sub(unicode::display_width(&kind));

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled("  ", Style::default().bg(bg)));
    spans.push(Span::styled(
        kind,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" ".repeat(pad + 2), Style::default().bg(bg)));

    spans.push(Span::styled(
        format!("{:<9}", task.status.label()),
        Style::default().fg(app.theme.status_color(task.status)).bg(bg),
    ));
    spans.push(Span::styled("  ", Style::default().bg(bg)));

    spans.push(Span::styled(
        progress_bar(task.progress, BAR_W),
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    spans.push(Span::styled(
        format!(" {:>3}%", task.progress),
        Style::default().fg(app.theme.text).bg(bg),
    ));
    spans.push(Span::styled("  ", Style::default().bg(bg)));

    spans.push(Span::styled(
        task.started_at.clone(),
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
