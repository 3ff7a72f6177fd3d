use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, NoticeKind, RecordsTab, Screen};

const PICKER_HINT: &str = "space select  a all  n none  / search  c category  Enter next  Esc back";
const LIKING_HINT: &str = "space select  t kind  a all  / search  Enter next  Esc back";
const SEARCH_HINT: &str = "type to filter  Enter done";
const PACING_HINT: &str = "Tab field  space cycle  Enter create  Esc back";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Success => app.theme.green,
            NoticeKind::Error => app.theme.red,
        };
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.push(Span::styled(
            notice.text.as_str(),
            Style::default().fg(color).bg(bg),
        ));
    }

    if !app.hide_key_hints {
        let hint = hint_for(app);
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    if spans.is_empty() {
        spans.push(Span::styled(" ".repeat(width), Style::default().bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Key hint for whatever currently owns the keyboard.
fn hint_for(app: &App) -> &'static str {
    if app.confirm.is_some() {
        return "y confirm  n cancel";
    }
    match &app.screen {
        Screen::Token(_) => "Enter save  Ctrl+E edit saved  Ctrl+D delete  Esc back",
        Screen::Menu(_) => "\u{2191}\u{2193} move  Enter open  q quit",
        Screen::Publish(state) => {
            if state.step == 2 {
                PACING_HINT
            } else if state.search_focus {
                SEARCH_HINT
            } else {
                PICKER_HINT
            }
        }
        Screen::Repost(state) => {
            if state.step == 2 {
                PACING_HINT
            } else if state.search_focus {
                SEARCH_HINT
            } else {
                PICKER_HINT
            }
        }
        Screen::Liking(state) => {
            if state.step == 1 {
                PACING_HINT
            } else if state.search_focus {
                SEARCH_HINT
            } else {
                LIKING_HINT
            }
        }
        Screen::DataEntry(_) => "Tab table  \u{2191}\u{2193} field  Enter add  Esc back",
        Screen::Tasks(state) => {
            if state.detail.is_some() {
                "Esc close"
            } else {
                "s start  x stop  d delete  Enter details  Esc back"
            }
        }
        Screen::Records(state) => {
            if state.edit.is_some() {
                "Tab field  Enter save  Esc cancel"
            } else if state.search_focus {
                SEARCH_HINT
            } else if state.tab == RecordsTab::Groups {
                "e edit  d delete  / search  c category  Tab table  Esc back"
            } else {
                "e edit  d delete  Tab table  Esc back"
            }
        }
    }
}
