//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which the plugin shim
//! changes [`AppState`]. The shim translates raw key presses and pipe
//! messages into [`Event`]s according to the active
//! [`InputContext`](crate::app::InputContext); the handler then applies them.
//!
//! # Event Types
//!
//! - **Routing**: `Navigate`, `EditSelected`
//! - **Grid**: `CursorLeft`, `CursorRight`, `CursorUp`, `CursorDown`, `DeleteSelected`
//! - **Overlay**: `ShowDetails`, `DismissDetails`
//! - **Form**: `FocusNextField`, `FocusPreviousField`, `Char`, `Backspace`, `Enter`, `SubmitForm`
//! - **Runtime**: `CloseFocus`
//!
//! While the details overlay is open it blocks the screen beneath it: only
//! `DismissDetails` and `Navigate` are applied, everything else is dropped.
//! Events that do not apply to the mounted screen are no-ops.
//!
//! # Example
//!
//! ```rust
//! use zbooks::app::{handle_event, AppState, Event};
//! use zbooks::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), "/books");
//! let (should_render, actions) = handle_event(&mut state, &Event::Navigate("/books/add".into()));
//! assert!(should_render);
//! assert!(actions.is_empty());
//! ```

use super::form::{BookForm, EnterOutcome};
use super::route::Route;
use crate::app::{Action, AppState};
use crate::domain::{Book, BookId};

/// Events triggered by user input or pipe messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Routes to a path. Unmatched paths render a blank screen.
    Navigate(String),

    /// Moves the grid cursor one card back (wraps).
    CursorLeft,
    /// Moves the grid cursor one card forward (wraps).
    CursorRight,
    /// Moves the grid cursor one row up, keeping its column.
    CursorUp,
    /// Moves the grid cursor one row down, keeping its column.
    CursorDown,

    /// Opens the details overlay for the highlighted card.
    ShowDetails,
    /// Closes the details overlay.
    DismissDetails,
    /// Deletes the highlighted card's book.
    DeleteSelected,
    /// Routes to the edit form of the highlighted card's book.
    EditSelected,

    /// Moves form focus forward (wraps).
    FocusNextField,
    /// Moves form focus backward (wraps).
    FocusPreviousField,
    /// Types a character into the focused input.
    Char(char),
    /// Deletes the last character of the focused input.
    Backspace,
    /// Newline in the description, submission elsewhere.
    Enter,
    /// Submits the form regardless of focus (`Ctrl+s`).
    SubmitForm,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event and returns the render flag and actions to execute.
///
/// # Returns
///
/// A tuple of:
/// - `bool`: whether the state changed and the UI should be re-rendered
/// - `Vec<Action>`: side effects for the plugin runtime
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    if state.selected_book().is_some() {
        return match event {
            Event::DismissDetails => (state.dismiss_details(), vec![]),
            Event::Navigate(path) => (state.navigate(path), vec![]),
            _ => {
                tracing::trace!("event swallowed by details overlay");
                (false, vec![])
            }
        };
    }

    match event {
        Event::Navigate(path) => (state.navigate(path), vec![]),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::DismissDetails => (false, vec![]),

        Event::CursorLeft | Event::CursorRight | Event::CursorUp | Event::CursorDown => {
            if state.route() != Some(Route::List) {
                return (false, vec![]);
            }
            let moved = match event {
                Event::CursorLeft => state.move_cursor(-1),
                Event::CursorRight => state.move_cursor(1),
                Event::CursorUp => state.move_cursor_row(false),
                _ => state.move_cursor_row(true),
            };
            (moved, vec![])
        }
        Event::ShowDetails => {
            let Some(id) = highlighted_on_list(state) else {
                return (false, vec![]);
            };
            (state.show_details(id), vec![])
        }
        Event::DeleteSelected => {
            let Some(id) = highlighted_on_list(state) else {
                return (false, vec![]);
            };
            tracing::debug!(book_id = %id, "deleting highlighted book");
            (state.delete_book(id), vec![])
        }
        Event::EditSelected => {
            let Some(id) = highlighted_on_list(state) else {
                return (false, vec![]);
            };
            (state.navigate(&Route::EditForm(id).path()), vec![])
        }

        Event::FocusNextField => with_form(state, |form| {
            form.focus_next();
            true
        }),
        Event::FocusPreviousField => with_form(state, |form| {
            form.focus_previous();
            true
        }),
        Event::Char(c) => with_form(state, |form| form.insert_char(*c)),
        Event::Backspace => with_form(state, BookForm::backspace),
        Event::Enter => {
            let Some(outcome) = state.form_mut().map(BookForm::enter) else {
                return (false, vec![]);
            };
            match outcome {
                EnterOutcome::Newline => (true, vec![]),
                EnterOutcome::Submitted(draft) => (state.submit_form(draft), vec![]),
            }
        }
        Event::SubmitForm => {
            let Some(draft) = state.form().map(BookForm::submit) else {
                return (false, vec![]);
            };
            (state.submit_form(draft), vec![])
        }
    }
}

fn highlighted_on_list(state: &AppState) -> Option<BookId> {
    if state.route() != Some(Route::List) {
        return None;
    }
    state.highlighted_book().map(Book::id)
}

fn with_form(
    state: &mut AppState,
    f: impl FnOnce(&mut BookForm) -> bool,
) -> (bool, Vec<Action>) {
    (state.form_mut().is_some_and(f), vec![])
}
