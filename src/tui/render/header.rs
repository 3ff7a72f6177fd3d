use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::CategoryFilter;
use crate::tui::app::{App, EntryTab, LikeTarget, RecordsTab, Screen};

/// Render the header: brand + screen title + inner tabs, separator line below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    // Split into tab row and separator row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Title of the current screen plus its inner tabs, if any.
fn screen_tabs(app: &App) -> (&'static str, Vec<(&'static str, bool)>) {
    match &app.screen {
        Screen::Token(_) => ("Access token", Vec::new()),
        Screen::Menu(_) => ("Menu", Vec::new()),
        Screen::Publish(state) => (
            "Publishing",
            vec![
                ("Groups", state.step == 0),
                ("Posts", state.step == 1),
                ("Pacing", state.step == 2),
            ],
        ),
        Screen::Repost(state) => (
            "Reposts",
            vec![
                ("Donors", state.step == 0),
                ("Targets", state.step == 1),
                ("Pacing", state.step == 2),
            ],
        ),
        Screen::Liking(state) => (
            "Liking",
            vec![("Objects", state.step == 0), ("Pacing", state.step == 1)],
        ),
        Screen::DataEntry(state) => (
            "Add data",
            [EntryTab::Groups, EntryTab::Posts, EntryTab::Categories]
                .iter()
                .map(|t| (t.label(), state.tab == *t))
                .collect(),
        ),
        Screen::Tasks(_) => ("Tasks", Vec::new()),
        Screen::Records(state) => (
            "Database",
            [
                RecordsTab::Groups,
                RecordsTab::Posts,
                RecordsTab::Categories,
                RecordsTab::Tokens,
            ]
            .iter()
            .map(|t| (t.label(), state.tab == *t))
            .collect(),
        ),
    }
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    // Brand
    let bg_style = Style::default().bg(app.theme.background);
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{25C6}",
        Style::default().fg(app.theme.purple).bg(app.theme.background),
    ));
    spans.push(Span::styled(
        " vkdeck ",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
    spans.push(sep.clone());

    // Screen title, highlighted only when the screen has no inner tabs
    let (title, tabs) = screen_tabs(app);
    spans.push(Span::styled(
        format!(" {} ", title),
        tab_style(app, tabs.is_empty()),
    ));
    sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
    spans.push(sep.clone());

    // Wizard steps or table tabs
    for (label, is_current) in tabs {
        spans.push(Span::styled(format!(" {} ", label), tab_style(app, is_current)));
        sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
        spans.push(sep.clone());
    }

    let line = Line::from(spans);
    let tabs_widget = Paragraph::new(line).style(Style::default().bg(app.theme.background));
    frame.render_widget(tabs_widget, area);
    sep_cols
}

/// Category facet shown in the separator row, if the visible list has one.
fn active_category(app: &App) -> Option<&str> {
    let filter = match &app.screen {
        Screen::Publish(state) => match state.step {
            0 => &state.groups.filter,
            1 => &state.posts.filter,
            _ => return None,
        },
        Screen::Repost(state) => match state.step {
            0 => &state.donors.filter,
            1 => &state.targets.filter,
            _ => return None,
        },
        Screen::Liking(state) => match (state.step, state.target) {
            (0, LikeTarget::Groups) => &state.groups.filter,
            _ => return None,
        },
        Screen::Records(state) if state.tab == RecordsTab::Groups => &state.filter,
        _ => return None,
    };
    match filter {
        CategoryFilter::Only(name) => Some(name),
        CategoryFilter::All => None,
    }
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;

    if let Some(name) = active_category(app) {
        // Build indicator spans: "category: " + name
        let indicator_spans = vec![
            Span::styled("category: ", Style::default().fg(app.theme.purple).bg(bg)),
            Span::styled(name.to_string(), Style::default().fg(app.theme.cyan).bg(bg)),
        ];

        // Calculate indicator width
        let indicator_width: usize =
            indicator_spans.iter().map(|s| s.content.chars().count()).sum();
        // +2: one space before indicator, one space after (right edge buffer)
        let separator_end = width.saturating_sub(indicator_width + 2);

        let mut spans: Vec<Span> = Vec::new();
        // Build separator chars up to where indicator starts
        let mut sep_text = String::with_capacity(separator_end * 3);
        for col in 0..separator_end {
            if sep_cols.contains(&col) {
                sep_text.push('\u{2534}');
            } else {
                sep_text.push('\u{2500}');
            }
        }
        spans.push(Span::styled(sep_text, Style::default().fg(dim).bg(bg)));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.extend(indicator_spans);
        // Trailing space
        let current_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        if current_width < width {
            spans.push(Span::styled(
                " ".repeat(width - current_width),
                Style::default().bg(bg),
            ));
        }

        let line = Line::from(spans);
        let sep_widget = Paragraph::new(line).style(Style::default().bg(bg));
        frame.render_widget(sep_widget, area);
    } else {
        // No facet — plain separator
        let mut line: String = String::with_capacity(width * 3);
        for col in 0..width {
            if sep_cols.contains(&col) {
                line.push('\u{2534}');
            } else {
                line.push('\u{2500}');
            }
        }
        let sep_widget = Paragraph::new(line).style(Style::default().fg(dim).bg(bg));
        frame.render_widget(sep_widget, area);
    }
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
