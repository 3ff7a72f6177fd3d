/// Which screen is showing. Fieldless twin of [`super::app::Screen`] so
/// navigation can be computed without touching screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Token,
    Menu,
    Publish,
    Repost,
    Liking,
    DataEntry,
    Tasks,
    Records,
}

/// Something that asks for a screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// A menu choice (or the token shortcut).
    Open(ScreenKind),
    /// Esc from a screen.
    Back,
    /// Token was saved on the token screen.
    TokenSaved,
    /// Token was deleted.
    TokenDeleted,
    /// A wizard or form submitted successfully.
    Submitted,
}

/// Compute the next screen. Returns None when the event does not move
/// anywhere (staying on the current screen keeps its state).
///
/// Without a stored token every destination except the token screen is
/// refused; the token screen is the only way in.
pub fn next_screen(current: ScreenKind, event: NavEvent, token_present: bool) -> Option<ScreenKind> {
    match event {
        NavEvent::Open(kind) => {
            if kind == current {
                None
            } else if token_present || kind == ScreenKind::Token {
                Some(kind)
            } else {
                None
            }
        }
        NavEvent::Back => match current {
            ScreenKind::Menu => None,
            ScreenKind::Token => token_present.then_some(ScreenKind::Menu),
            _ => Some(ScreenKind::Menu),
        },
        NavEvent::TokenSaved => Some(ScreenKind::Menu),
        NavEvent::TokenDeleted => Some(ScreenKind::Token),
        NavEvent::Submitted => Some(ScreenKind::Menu),
    }
}
