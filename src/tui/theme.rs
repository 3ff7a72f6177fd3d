use ratatui::style::Color;

use crate::model::{LogKind, TaskStatus, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0A, 0x15, 0x20),
            text: Color::Rgb(0x9F, 0xB8, 0xD0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x71, 0xAA, 0xEB),
            dim: Color::Rgb(0x5F, 0x7A, 0x94),
            red: Color::Rgb(0xE6, 0x46, 0x46),
            yellow: Color::Rgb(0xFF, 0xC1, 0x07),
            green: Color::Rgb(0x4B, 0xB3, 0x4B),
            cyan: Color::Rgb(0x3F, 0x8A, 0xE0),
            purple: Color::Rgb(0xA3, 0x93, 0xF5),
            selection_bg: Color::Rgb(0x1D, 0x3A, 0x5C),
            selection_border: Color::Rgb(0x71, 0xAA, 0xEB),
            search_match_bg: Color::Rgb(0xFF, 0xD7, 0x5F),
            search_match_fg: Color::Rgb(0x0A, 0x15, 0x20),
        }
    }
}

/// Parse a hex color string like "#E64646" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "purple" => theme.purple = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Badge color for a task status
    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Pending => self.yellow,
            TaskStatus::Running => self.cyan,
            TaskStatus::Completed => self.green,
            TaskStatus::Error => self.red,
        }
    }

    /// Marker color for an execution log line
    pub fn log_color(&self, kind: LogKind) -> Color {
        match kind {
            LogKind::Success => self.green,
            LogKind::Pause => self.yellow,
            LogKind::Error => self.red,
        }
    }
}
