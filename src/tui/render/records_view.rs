use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, RecordsState, RecordsTab};
use crate::util::unicode;

use super::helpers::{search_regex, spans_width};
use super::push_highlighted_spans;

const NAME_COL: usize = 24;
const TEXT_COL: usize = 36;

/// Render the record browser for the active tab. Only the groups tab
/// carries the search box and category facet.
pub fn render_records_view(frame: &mut Frame, app: &App, state: &RecordsState, area: Rect) {
    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    if state.tab == RecordsTab::Groups {
        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(" search: ", dim_style));
        if !state.search.is_empty() {
            let style = if state.search_focus {
                Style::default().fg(app.theme.text_bright).bg(bg)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            spans.push(Span::styled(state.search.clone(), style));
        }
        if state.search_focus {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    match state.tab {
        RecordsTab::Groups => render_groups(app, state, &mut lines, area.width),
        RecordsTab::Posts => render_posts(app, state, &mut lines, area.width),
        RecordsTab::Categories => render_categories(app, state, &mut lines, area.width),
        RecordsTab::Tokens => render_tokens(app, state, &mut lines, area.width),
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn header_line<'a>(app: &App, text: String) -> Line<'a> {
    Line::from(Span::styled(
        text,
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ))
}

fn empty_line<'a>(app: &App) -> Line<'a> {
    Line::from(Span::styled(
        " No records",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ))
}

/// Pad the cursor row with background to the right edge.
fn finish_row<'a>(app: &App, mut spans: Vec<Span<'a>>, is_cursor: bool, width: u16) -> Line<'a> {
    if is_cursor {
        let used = spans_width(&spans);
        let w = width as usize;
        if used < w {
            spans.push(Span::styled(
                " ".repeat(w - used),
                Style::default().bg(app.theme.selection_bg),
            ));
        }
    }
    Line::from(spans)
}

fn render_groups(app: &App, state: &RecordsState, lines: &mut Vec<Line>, width: u16) {
    let visible = state.visible_groups();
    if visible.is_empty() {
        lines.push(empty_line(app));
        return;
    }

    lines.push(header_line(
        app,
        format!("  {:<n$}  {:<12}  {:>8}  {}", "name", "category", "members", "vk id", n = NAME_COL),
    ));

    let search_re = search_regex(&state.search);
    for (pos, &idx) in visible.iter().enumerate() {
        let group = &state.groups[idx];
        let is_cursor = pos == state.cursor;
        let bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled("  ", Style::default().bg(bg)));

        let name = unicode::truncate_to_width(&group.name, NAME_COL);
        let pad = NAME_COL.saturating_sub(unicode::display_width(&name));
        let name_style = Style::default().fg(app.theme.text_bright).bg(bg);
        let hl_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);
        push_highlighted_spans(&mut spans, &name, name_style, hl_style, search_re.as_ref());
        spans.push(Span::styled(" ".repeat(pad + 2), Style::default().bg(bg)));

        let category = unicode::truncate_to_width(&group.category, 12);
        let cat_pad = 12usize.saturating_sub(unicode::display_width(&category));
        spans.push(Span::styled(
            category,
            Style::default().fg(app.theme.cyan).bg(bg),
        ));
        spans.push(Span::styled(" ".repeat(cat_pad + 2), Style::default().bg(bg)));

        let members = group
            .members
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        spans.push(Span::styled(
            format!("{:>8}", members),
            Style::default().fg(app.theme.text).bg(bg),
        ));
        spans.push(Span::styled(
            format!("  {}", group.vk_id),
            Style::default().fg(app.theme.dim).bg(bg),
        ));

        lines.push(finish_row(app, spans, is_cursor, width));
    }
}

fn render_posts(app: &App, state: &RecordsState, lines: &mut Vec<Line>, width: u16) {
    if state.posts.is_empty() {
        lines.push(empty_line(app));
        return;
    }

    lines.push(header_line(
        app,
        format!("  {:<t$}  {:<12}  {}", "text", "category", "media", t = TEXT_COL),
    ));

    for (pos, post) in state.posts.iter().enumerate() {
        let is_cursor = pos == state.cursor;
        let bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };

        let text = unicode::truncate_to_width(&post.text, TEXT_COL);
        let pad = TEXT_COL.saturating_sub(unicode::display_width(&text));

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled("  ", Style::default().bg(bg)));
        spans.push(Span::styled(
            text,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        spans.push(Span::styled(" ".repeat(pad + 2), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{:<12}", post.category),
            Style::default().fg(app.theme.cyan).bg(bg),
        ));
        spans.push(Span::styled(
            if post.has_media { "  yes" } else { "  -" }.to_string(),
            Style::default().fg(app.theme.text).bg(bg),
        ));

        lines.push(finish_row(app, spans, is_cursor, width));
    }
}

fn render_categories(app: &App, state: &RecordsState, lines: &mut Vec<Line>, width: u16) {
    if state.categories.is_empty() {
        lines.push(empty_line(app));
        return;
    }

    lines.push(header_line(app, "  name".to_string()));

    for (pos, category) in state.categories.iter().enumerate() {
        let is_cursor = pos == state.cursor;
        let bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };
        let spans = vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                category.name.clone(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ];
        lines.push(finish_row(app, spans, is_cursor, width));
    }
}

fn render_tokens(app: &App, state: &RecordsState, lines: &mut Vec<Line>, width: u16) {
    if state.tokens.is_empty() {
        lines.push(empty_line(app));
        return;
    }

    lines.push(header_line(
        app,
        format!("  {:<24}  {}", "token", "added"),
    ));

    for (pos, token) in state.tokens.iter().enumerate() {
        let is_cursor = pos == state.cursor;
        let bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };
        let spans = vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                format!("{:<24}", token.token),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled(
                format!("  {}", token.added),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ];
        lines.push(finish_row(app, spans, is_cursor, width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryFilter;
    use crate::tui::app::Screen;
    use crate::tui::nav::ScreenKind;
    use crate::tui::render::test_helpers::{TERM_W, app_on, render_to_string};

    fn records_output(app: &App) -> String {
        let Screen::Records(state) = &app.screen else {
            panic!("expected records screen");
        };
        render_to_string(TERM_W, 14, |frame, area| {
            render_records_view(frame, app, state, area);
        })
    }

    #[test]
    fn groups_tab_lists_rows_with_members() {
        let out = records_output(&app_on(ScreenKind::Records));
        assert!(out.contains("Группа 1"));
        assert!(out.contains("Маркетинг"));
        assert!(out.contains("5000"));
        assert!(out.contains("search:"));
    }

    #[test]
    fn facet_narrows_the_groups_tab() {
        let mut app = app_on(ScreenKind::Records);
        if let Screen::Records(state) = &mut app.screen {
            state.filter = CategoryFilter::Only("IT".into());
        }
        let out = records_output(&app);
        assert!(out.contains("Группа 2"));
        assert!(!out.contains("Группа 1"));
    }

    #[test]
    fn posts_tab_shows_media_markers() {
        let mut app = app_on(ScreenKind::Records);
        if let Screen::Records(state) = &mut app.screen {
            state.tab = RecordsTab::Posts;
        }
        let out = records_output(&app);
        assert!(out.contains("Отличное предложение для вас!"));
        assert!(out.contains("yes"));
        // Посты have no search box
        assert!(!out.contains("search:"));
    }

    #[test]
    fn tokens_tab_shows_masked_value_and_date() {
        let mut app = app_on(ScreenKind::Records);
        if let Screen::Records(state) = &mut app.screen {
            state.tab = RecordsTab::Tokens;
        }
        let out = records_output(&app);
        assert!(out.contains("vk1.a.***************"));
        assert!(out.contains("2025-10-20 14:30"));
    }

    #[test]
    fn emptied_table_reports_no_records() {
        let mut app = app_on(ScreenKind::Records);
        if let Screen::Records(state) = &mut app.screen {
            state.tab = RecordsTab::Categories;
            state.categories.clear();
        }
        let out = records_output(&app);
        assert!(out.contains("No records"));
    }
}
