use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::tui::app::{App, Screen};
use crate::tui::nav::ScreenKind;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// App sitting on a given screen with a token considered saved.
/// Built directly so render tests never touch the filesystem.
pub fn app_on(kind: ScreenKind) -> App {
    App {
        screen: Screen::fresh(kind),
        token_present: true,
        data_dir: PathBuf::from("/tmp/vkdeck-render-test"),
        theme: Theme::default(),
        hide_key_hints: false,
        notice: None,
        confirm: None,
        should_quit: false,
    }
}

/// App at the token gate with nothing saved yet.
pub fn gated_app() -> App {
    let mut app = app_on(ScreenKind::Token);
    app.token_present = false;
    app
}
