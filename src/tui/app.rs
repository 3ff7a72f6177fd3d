use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::io::token_io::load_token;
use crate::model::config::AppConfig;
use crate::model::seed;
use crate::model::{
    AutomationTask, Category, CategoryFilter, Group, LogEntry, PacingDraft, Post, SelectionList,
    TokenRecord, User,
};

use super::form::TextField;
use super::input;
use super::nav::{self, NavEvent, ScreenKind};
use super::render;
use super::theme::Theme;

// ---------------------------------------------------------------------------
// Per-screen state
// ---------------------------------------------------------------------------

/// Token entry screen. The field starts empty; Ctrl+E loads the stored
/// token for editing.
#[derive(Debug, Clone, Default)]
pub struct TokenState {
    pub field: TextField,
}

/// One menu row.
pub struct MenuEntry {
    pub kind: ScreenKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MENU_ENTRIES: [MenuEntry; 6] = [
    MenuEntry {
        kind: ScreenKind::Publish,
        title: "Post publishing",
        description: "Create publishing tasks for your communities",
    },
    MenuEntry {
        kind: ScreenKind::Repost,
        title: "Reposts",
        description: "Automatic reposts from donor communities",
    },
    MenuEntry {
        kind: ScreenKind::Liking,
        title: "Mass liking",
        description: "Like community and user posts",
    },
    MenuEntry {
        kind: ScreenKind::DataEntry,
        title: "Add data",
        description: "Groups, posts and categories",
    },
    MenuEntry {
        kind: ScreenKind::Tasks,
        title: "Tasks",
        description: "Monitor task execution",
    },
    MenuEntry {
        kind: ScreenKind::Records,
        title: "Database",
        description: "Browse and edit stored records",
    },
];

/// Index of the synthetic "Manage token" row below the menu entries.
pub const MENU_TOKEN_ROW: usize = MENU_ENTRIES.len();

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub cursor: usize,
}

/// Which pacing form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PacingField {
    #[default]
    Min,
    Max,
    Unit,
    Start,
    Date,
    Time,
}

/// Post publishing wizard: groups, then posts, then pacing.
pub struct PublishState {
    pub step: usize,
    pub groups: SelectionList<Group>,
    pub posts: SelectionList<Post>,
    pub cursor: usize,
    pub search_focus: bool,
    pub pacing: PacingDraft,
    pub pacing_focus: PacingField,
}

impl PublishState {
    pub fn new() -> Self {
        PublishState {
            step: 0,
            groups: SelectionList::new(seed::publish_groups(), seed::publish_categories()),
            posts: SelectionList::new(seed::publish_posts(), seed::publish_categories()),
            cursor: 0,
            search_focus: false,
            pacing: PacingDraft::new("30", "60"),
            pacing_focus: PacingField::Min,
        }
    }
}

/// Repost wizard: donor communities, then targets, then pacing.
pub struct RepostState {
    pub step: usize,
    pub donors: SelectionList<Group>,
    pub targets: SelectionList<Group>,
    pub cursor: usize,
    pub search_focus: bool,
    pub pacing: PacingDraft,
    pub pacing_focus: PacingField,
}

impl RepostState {
    pub fn new() -> Self {
        RepostState {
            step: 0,
            donors: SelectionList::new(seed::donor_groups(), seed::publish_categories()),
            targets: SelectionList::new(seed::target_groups(), seed::publish_categories()),
            cursor: 0,
            search_focus: false,
            pacing: PacingDraft::new("30", "60"),
            pacing_focus: PacingField::Min,
        }
    }
}

/// What the liking wizard likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Groups,
    Users,
}

/// Mass liking wizard: pick objects, then pacing.
pub struct LikingState {
    pub step: usize,
    pub target: LikeTarget,
    pub groups: SelectionList<Group>,
    pub users: SelectionList<User>,
    pub cursor: usize,
    pub search_focus: bool,
    pub pacing: PacingDraft,
    pub pacing_focus: PacingField,
}

impl LikingState {
    pub fn new() -> Self {
        LikingState {
            step: 0,
            target: LikeTarget::Groups,
            groups: SelectionList::new(seed::liking_groups(), seed::liking_categories()),
            // User lists carry no category facet
            users: SelectionList::new(seed::liking_users(), Vec::new()),
            cursor: 0,
            search_focus: false,
            pacing: PacingDraft::new("10", "30"),
            pacing_focus: PacingField::Min,
        }
    }

    /// Both lists share one search box; keep the text when switching kinds.
    pub fn toggle_target(&mut self) {
        let (from, to) = match self.target {
            LikeTarget::Groups => (&self.groups.search, &mut self.users.search),
            LikeTarget::Users => (&self.users.search, &mut self.groups.search),
        };
        *to = from.clone();
        self.target = match self.target {
            LikeTarget::Groups => LikeTarget::Users,
            LikeTarget::Users => LikeTarget::Groups,
        };
        self.cursor = 0;
    }
}

/// Data entry tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryTab {
    #[default]
    Groups,
    Posts,
    Categories,
}

impl EntryTab {
    pub fn label(&self) -> &'static str {
        match self {
            EntryTab::Groups => "Groups",
            EntryTab::Posts => "Posts",
            EntryTab::Categories => "Categories",
        }
    }

    pub fn next(&self) -> EntryTab {
        match self {
            EntryTab::Groups => EntryTab::Posts,
            EntryTab::Posts => EntryTab::Categories,
            EntryTab::Categories => EntryTab::Groups,
        }
    }

    pub fn prev(&self) -> EntryTab {
        match self {
            EntryTab::Groups => EntryTab::Categories,
            EntryTab::Posts => EntryTab::Groups,
            EntryTab::Categories => EntryTab::Posts,
        }
    }

    /// Number of focusable form fields on this tab.
    pub fn field_count(&self) -> usize {
        match self {
            EntryTab::Groups => 4,
            EntryTab::Posts => 3,
            EntryTab::Categories => 1,
        }
    }
}

/// Add-record forms. Submitting only validates, notifies and resets;
/// nothing is stored.
pub struct DataEntryState {
    pub tab: EntryTab,
    pub focus: usize,
    pub categories: Vec<String>,

    pub group_vk_id: TextField,
    pub group_name: TextField,
    pub group_category: Option<usize>,
    pub group_members: TextField,

    pub post_text: TextField,
    pub post_media_url: TextField,
    pub post_category: Option<usize>,

    pub category_name: TextField,
}

impl DataEntryState {
    pub fn new() -> Self {
        DataEntryState {
            tab: EntryTab::Groups,
            focus: 0,
            categories: seed::entry_categories(),
            group_vk_id: TextField::new(),
            group_name: TextField::new(),
            group_category: None,
            group_members: TextField::new(),
            post_text: TextField::new(),
            post_media_url: TextField::new(),
            post_category: None,
            category_name: TextField::new(),
        }
    }

    pub fn reset_group_form(&mut self) {
        self.group_vk_id.clear();
        self.group_name.clear();
        self.group_category = None;
        self.group_members.clear();
    }

    pub fn reset_post_form(&mut self) {
        self.post_text.clear();
        self.post_media_url.clear();
        self.post_category = None;
    }
}

/// Task monitor.
pub struct TasksState {
    pub tasks: Vec<AutomationTask>,
    pub log: Vec<LogEntry>,
    pub cursor: usize,
    /// Task id whose detail popup is open.
    pub detail: Option<u32>,
}

impl TasksState {
    pub fn new() -> Self {
        TasksState {
            tasks: seed::monitor_tasks(),
            log: seed::execution_log(),
            cursor: 0,
            detail: None,
        }
    }

    pub fn clamp_cursor(&mut self) {
        if self.tasks.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.tasks.len() - 1);
        }
    }
}

/// Records tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordsTab {
    #[default]
    Groups,
    Posts,
    Categories,
    Tokens,
}

impl RecordsTab {
    pub fn label(&self) -> &'static str {
        match self {
            RecordsTab::Groups => "Groups",
            RecordsTab::Posts => "Posts",
            RecordsTab::Categories => "Categories",
            RecordsTab::Tokens => "Tokens",
        }
    }

    pub fn next(&self) -> RecordsTab {
        match self {
            RecordsTab::Groups => RecordsTab::Posts,
            RecordsTab::Posts => RecordsTab::Categories,
            RecordsTab::Categories => RecordsTab::Tokens,
            RecordsTab::Tokens => RecordsTab::Groups,
        }
    }

    pub fn prev(&self) -> RecordsTab {
        match self {
            RecordsTab::Groups => RecordsTab::Tokens,
            RecordsTab::Posts => RecordsTab::Groups,
            RecordsTab::Categories => RecordsTab::Posts,
            RecordsTab::Tokens => RecordsTab::Categories,
        }
    }
}

/// Field contents of the edit popup, one variant per record shape.
pub enum EditPayload {
    Group {
        id: String,
        name: TextField,
        category: usize,
    },
    Post {
        id: String,
        text: TextField,
    },
    Category {
        id: String,
        name: TextField,
    },
    Token {
        id: String,
        token: TextField,
    },
}

pub struct EditState {
    pub payload: EditPayload,
    pub focus: usize,
}

/// Record browser with per-screen working copies of every table.
pub struct RecordsState {
    pub tab: RecordsTab,
    pub groups: Vec<Group>,
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub tokens: Vec<TokenRecord>,
    pub cursor: usize,
    /// Search and facet apply to the groups tab only.
    pub search: String,
    pub search_focus: bool,
    pub filter: CategoryFilter,
    pub edit: Option<EditState>,
}

impl RecordsState {
    pub fn new() -> Self {
        RecordsState {
            tab: RecordsTab::Groups,
            groups: seed::group_records(),
            posts: seed::post_records(),
            categories: seed::category_records(),
            tokens: seed::token_records(),
            cursor: 0,
            search: String::new(),
            search_focus: false,
            filter: CategoryFilter::All,
            edit: None,
        }
    }

    /// Indices of groups passing the search box and category facet.
    pub fn visible_groups(&self) -> Vec<usize> {
        let needle = self.search.to_lowercase();
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, g)| {
                g.name.to_lowercase().contains(&needle)
                    && self.filter.admits(Some(g.category.as_str()))
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Row count of the current tab (after filtering on the groups tab).
    pub fn row_count(&self) -> usize {
        match self.tab {
            RecordsTab::Groups => self.visible_groups().len(),
            RecordsTab::Posts => self.posts.len(),
            RecordsTab::Categories => self.categories.len(),
            RecordsTab::Tokens => self.tokens.len(),
        }
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.row_count();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Walk the category facet through the live categories table.
    pub fn cycle_filter(&mut self) {
        let names: Vec<&str> = self.categories.iter().map(|c| c.name.as_str()).collect();
        if names.is_empty() {
            self.filter = CategoryFilter::All;
            return;
        }
        self.filter = match &self.filter {
            CategoryFilter::All => CategoryFilter::Only(names[0].to_string()),
            CategoryFilter::Only(current) => match names.iter().position(|n| n == current) {
                Some(i) if i + 1 < names.len() => CategoryFilter::Only(names[i + 1].to_string()),
                _ => CategoryFilter::All,
            },
        };
    }
}

// ---------------------------------------------------------------------------
// Screens and app
// ---------------------------------------------------------------------------

/// The screen being shown, owning its working state. Navigating away
/// drops that state; every screen starts from the seed data again.
pub enum Screen {
    Token(TokenState),
    Menu(MenuState),
    Publish(PublishState),
    Repost(RepostState),
    Liking(LikingState),
    DataEntry(DataEntryState),
    Tasks(TasksState),
    Records(RecordsState),
}

impl Screen {
    pub fn fresh(kind: ScreenKind) -> Screen {
        match kind {
            ScreenKind::Token => Screen::Token(TokenState::default()),
            ScreenKind::Menu => Screen::Menu(MenuState::default()),
            ScreenKind::Publish => Screen::Publish(PublishState::new()),
            ScreenKind::Repost => Screen::Repost(RepostState::new()),
            ScreenKind::Liking => Screen::Liking(LikingState::new()),
            ScreenKind::DataEntry => Screen::DataEntry(DataEntryState::new()),
            ScreenKind::Tasks => Screen::Tasks(TasksState::new()),
            ScreenKind::Records => Screen::Records(RecordsState::new()),
        }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Token(_) => ScreenKind::Token,
            Screen::Menu(_) => ScreenKind::Menu,
            Screen::Publish(_) => ScreenKind::Publish,
            Screen::Repost(_) => ScreenKind::Repost,
            Screen::Liking(_) => ScreenKind::Liking,
            Screen::DataEntry(_) => ScreenKind::DataEntry,
            Screen::Tasks(_) => ScreenKind::Tasks,
            Screen::Records(_) => ScreenKind::Records,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient status-row message, cleared by the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// What a pending y/n popup will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteToken,
    DeleteTask { id: u32 },
    DeleteRecord { tab: RecordsTab, id: String },
}

pub struct ConfirmState {
    pub action: ConfirmAction,
    pub message: String,
}

/// Main application state
pub struct App {
    pub screen: Screen,
    pub token_present: bool,
    pub data_dir: PathBuf,
    pub theme: Theme,
    pub hide_key_hints: bool,
    pub notice: Option<Notice>,
    pub confirm: Option<ConfirmState>,
    pub should_quit: bool,
}

impl App {
    pub fn new(data_dir: PathBuf, config: &AppConfig) -> Self {
        let token_present = load_token(&data_dir).is_some();
        let screen = if token_present {
            Screen::fresh(ScreenKind::Menu)
        } else {
            Screen::fresh(ScreenKind::Token)
        };
        App {
            screen,
            token_present,
            data_dir,
            theme: Theme::from_config(&config.ui),
            hide_key_hints: config.ui.hide_key_hints,
            notice: None,
            confirm: None,
            should_quit: false,
        }
    }

    /// Apply a navigation event. A move replaces the screen with a fresh
    /// seeded one; a refused move leaves everything in place.
    pub fn navigate(&mut self, event: NavEvent) {
        if let Some(kind) = nav::next_screen(self.screen.kind(), event, self.token_present) {
            self.screen = Screen::fresh(kind);
        }
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        });
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        });
    }
}

// ---------------------------------------------------------------------------
// Terminal lifecycle
// ---------------------------------------------------------------------------

/// Run the TUI application
pub fn run(data_dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&data_dir)?;
    let mut app = App::new(data_dir, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(token_present: bool) -> App {
        let mut app = App::new(PathBuf::from("/tmp/vkdeck-test"), &AppConfig::default());
        // The test dir never has a token file; force the flag
        app.token_present = token_present;
        app.screen = if token_present {
            Screen::fresh(ScreenKind::Menu)
        } else {
            Screen::fresh(ScreenKind::Token)
        };
        app
    }

    #[test]
    fn starts_on_token_screen_without_a_token() {
        let app = test_app(false);
        assert_eq!(app.screen.kind(), ScreenKind::Token);
    }

    #[test]
    fn navigation_replaces_screen_with_fresh_state() {
        let mut app = test_app(true);
        app.navigate(NavEvent::Open(ScreenKind::Publish));
        if let Screen::Publish(state) = &mut app.screen {
            state.groups.toggle("1");
            assert!(state.groups.any_selected());
        } else {
            panic!("expected publish screen");
        }
        app.navigate(NavEvent::Back);
        assert_eq!(app.screen.kind(), ScreenKind::Menu);
        // Re-opening starts over: the previous selection is gone
        app.navigate(NavEvent::Open(ScreenKind::Publish));
        if let Screen::Publish(state) = &app.screen {
            assert!(!state.groups.any_selected());
            assert_eq!(state.step, 0);
        } else {
            panic!("expected publish screen");
        }
    }

    #[test]
    fn refused_navigation_keeps_screen_state() {
        let mut app = test_app(false);
        if let Screen::Token(state) = &mut app.screen {
            state.field.set("half-typed");
        }
        app.navigate(NavEvent::Open(ScreenKind::Records));
        // Still on the token screen, field intact
        if let Screen::Token(state) = &app.screen {
            assert_eq!(state.field.value, "half-typed");
        } else {
            panic!("expected token screen");
        }
    }

    #[test]
    fn liking_target_toggle_carries_the_search_text() {
        let mut state = LikingState::new();
        state.groups.search = "груп".into();
        state.toggle_target();
        assert_eq!(state.target, LikeTarget::Users);
        assert_eq!(state.users.search, "груп");
        state.users.search = "иван".into();
        state.toggle_target();
        assert_eq!(state.groups.search, "иван");
    }

    #[test]
    fn records_groups_facet_cycles_through_live_categories() {
        let mut state = RecordsState::new();
        assert_eq!(state.filter, CategoryFilter::All);
        state.cycle_filter();
        assert_eq!(state.filter, CategoryFilter::Only("Маркетинг".into()));
        // Deleting the current facet category makes the next cycle restart
        state.categories.retain(|c| c.name != "Маркетинг");
        state.cycle_filter();
        assert_eq!(state.filter, CategoryFilter::All);
    }

    #[test]
    fn records_group_search_and_facet_combine() {
        let mut state = RecordsState::new();
        assert_eq!(state.visible_groups().len(), 2);
        state.filter = CategoryFilter::Only("IT".into());
        let visible = state.visible_groups();
        assert_eq!(visible.len(), 1);
        assert_eq!(state.groups[visible[0]].name, "Группа 2");
        state.search = "нет".into();
        assert!(state.visible_groups().is_empty());
    }

    #[test]
    fn entry_tab_cycle_covers_all_tabs() {
        let tab = EntryTab::Groups;
        assert_eq!(tab.next(), EntryTab::Posts);
        assert_eq!(tab.next().next(), EntryTab::Categories);
        assert_eq!(tab.next().next().next(), EntryTab::Groups);
        assert_eq!(tab.prev(), EntryTab::Categories);
    }
}
