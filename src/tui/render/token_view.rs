use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::io::token_io::MIN_TOKEN_LEN;
use crate::tui::app::{App, TokenState};

use super::helpers::input_spans;

/// Render the token gate: a single masked input plus store status.
pub fn render_token_view(frame: &mut Frame, app: &App, state: &TokenState, area: Rect) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " VK access token",
        bright_style.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " The token is stored on this machine only and is never sent anywhere.",
        text_style,
    )));
    lines.push(Line::from(Span::styled(
        format!(" Tokens are at least {} characters long.", MIN_TOKEN_LEN),
        dim_style,
    )));
    lines.push(Line::from(""));

    // The input; masked like a password field
    {
        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(" token: ", dim_style));
        spans.extend(input_spans(&app.theme, &state.field, true, true));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    if app.token_present {
        lines.push(Line::from(Span::styled(
            " A token is saved. Ctrl+E loads it here, Ctrl+D deletes it.",
            dim_style,
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " No token saved yet. Paste one and press Enter.",
            dim_style,
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Screen;
    use crate::tui::render::test_helpers::{TERM_W, app_on, gated_app, render_to_string};
    use crate::tui::nav::ScreenKind;

    fn token_output(app: &App) -> String {
        let Screen::Token(state) = &app.screen else {
            panic!("expected token screen");
        };
        render_to_string(TERM_W, 12, |frame, area| {
            render_token_view(frame, app, state, area);
        })
    }

    #[test]
    fn typed_token_is_masked() {
        let mut app = gated_app();
        if let Screen::Token(state) = &mut app.screen {
            state.field.set("vk1.secret");
        }
        let out = token_output(&app);
        assert!(!out.contains("vk1.secret"));
        assert!(out.contains(&"\u{2022}".repeat(10)));
    }

    #[test]
    fn store_status_follows_the_flag() {
        let app = gated_app();
        assert!(token_output(&app).contains("No token saved yet"));

        let app = app_on(ScreenKind::Token);
        assert!(token_output(&app).contains("A token is saved"));
    }

    #[test]
    fn mentions_the_minimum_length() {
        let out = token_output(&gated_app());
        assert!(out.contains("at least 10 characters"));
    }
}
