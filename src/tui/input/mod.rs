mod common;
mod confirm;
mod data_entry;
mod liking;
mod menu;
mod pacing;
mod picker;
mod publish;
mod records;
mod repost;
mod tasks;
mod token;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::nav::ScreenKind;

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use data_entry::*;
#[allow(unused_imports)]
use liking::*;
#[allow(unused_imports)]
use menu::*;
#[allow(unused_imports)]
use pacing::*;
#[allow(unused_imports)]
use picker::*;
#[allow(unused_imports)]
use publish::*;
#[allow(unused_imports)]
use records::*;
#[allow(unused_imports)]
use repost::*;
#[allow(unused_imports)]
use tasks::*;
#[allow(unused_imports)]
use token::*;

// Re-export public items
pub use pacing::pacing_fields;

/// Handle a key event for the current screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Any key press dismisses the previous status notice
    app.notice = None;

    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Pending confirmation intercepts all input
    if app.confirm.is_some() {
        handle_confirm(app, key);
        return;
    }

    match app.screen.kind() {
        ScreenKind::Token => handle_token(app, key),
        ScreenKind::Menu => handle_menu(app, key),
        ScreenKind::Publish => handle_publish(app, key),
        ScreenKind::Repost => handle_repost(app, key),
        ScreenKind::Liking => handle_liking(app, key),
        ScreenKind::DataEntry => handle_data_entry(app, key),
        ScreenKind::Tasks => handle_tasks(app, key),
        ScreenKind::Records => handle_records(app, key),
    }
}
