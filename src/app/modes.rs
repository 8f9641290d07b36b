//! Input context derived from the current screen and overlay.
//!
//! The plugin shim uses [`InputContext`] to decide which keybindings are
//! active, and the footer uses it to pick its help text. It is never stored:
//! [`AppState::input_context`](crate::app::AppState::input_context) computes
//! it from the router and the selection on demand.
//!
//! Precedence, highest first:
//! - **Overlay**: a book is selected; only dismissal keys are honoured
//! - **Form**: the add or edit form is mounted; characters are typed
//! - **List**: the card grid is shown
//! - **Blank**: the path matches no screen

/// Which keybinding set is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Details overlay is open and blocks the screen beneath it.
    Overlay,
    /// Card grid navigation.
    List,
    /// Text entry into the add/edit form.
    Form,
    /// Unmatched path; only global navigation works.
    Blank,
}

impl InputContext {
    /// Keybinding hints shown in the footer.
    #[must_use]
    pub const fn keybindings(self) -> &'static str {
        match self {
            Self::Overlay => "Esc/x/Enter: close details",
            Self::List => "h/l/j/k: move  Enter: details  e: edit  x: delete  a: add  q: quit",
            Self::Form => "Tab/Shift+Tab: field  Enter/Ctrl+s: submit  Esc: back  Ctrl+l: list",
            Self::Blank => "Ctrl+l: book list  Ctrl+a: add book  q: quit",
        }
    }
}
