//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler keeps every state change inside [`AppState`](crate::app::AppState);
//! anything that has to reach Zellij itself is returned as an [`Action`] and
//! executed by the plugin shim after the event has been handled.

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user presses `q` outside the form.
    CloseFocus,
}
