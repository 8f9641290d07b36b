//! Keybindings per input context.
//!
//! The plugin shim converts Zellij key presses into [`Key`] and asks
//! [`map_key`] for the matching [`Event`]. Keeping the table here means it is
//! tested without the Zellij runtime.
//!
//! | Context | Keys |
//! |---|---|
//! | any but overlay | `Ctrl+l` book list, `Ctrl+a` add book |
//! | overlay | `Esc` / `x` / `Enter` close; everything else is swallowed |
//! | list | `h j k l` and arrows move, `Enter` / `d` details, `e` edit, `x` / `Delete` delete, `a` add, `q` quit |
//! | form | `Tab` / `↓` next field, `Shift+Tab` / `↑` previous, `Enter` submit or newline, `Ctrl+s` submit, `Esc` back |
//! | blank | `q` quit |

use super::handler::Event;
use super::modes::InputContext;
use super::route::{ADD_PATH, LIST_PATH};

/// A key press, stripped of the runtime's representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// A character with Ctrl held.
    Ctrl(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    /// Shift+Tab.
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

/// Looks up the event bound to `key` in `context`.
#[must_use]
pub fn map_key(context: InputContext, key: Key) -> Option<Event> {
    if context == InputContext::Overlay {
        return match key {
            Key::Esc | Key::Enter | Key::Char('x') => Some(Event::DismissDetails),
            _ => None,
        };
    }

    match key {
        Key::Ctrl('l') => return Some(Event::Navigate(LIST_PATH.to_string())),
        Key::Ctrl('a') => return Some(Event::Navigate(ADD_PATH.to_string())),
        Key::Ctrl('s') if context == InputContext::Form => return Some(Event::SubmitForm),
        Key::Ctrl(_) => return None,
        _ => {}
    }

    match context {
        InputContext::List => list_key(key),
        InputContext::Form => form_key(key),
        InputContext::Blank => (key == Key::Char('q')).then_some(Event::CloseFocus),
        InputContext::Overlay => None,
    }
}

fn list_key(key: Key) -> Option<Event> {
    Some(match key {
        Key::Left | Key::Char('h') => Event::CursorLeft,
        Key::Right | Key::Char('l') => Event::CursorRight,
        Key::Up | Key::Char('k') => Event::CursorUp,
        Key::Down | Key::Char('j') => Event::CursorDown,
        Key::Enter | Key::Char('d') => Event::ShowDetails,
        Key::Char('e') => Event::EditSelected,
        Key::Delete | Key::Char('x') => Event::DeleteSelected,
        Key::Char('a') => Event::Navigate(ADD_PATH.to_string()),
        Key::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

fn form_key(key: Key) -> Option<Event> {
    Some(match key {
        Key::Tab | Key::Down => Event::FocusNextField,
        Key::BackTab | Key::Up => Event::FocusPreviousField,
        Key::Enter => Event::Enter,
        Key::Backspace => Event::Backspace,
        Key::Esc => Event::Navigate(LIST_PATH.to_string()),
        Key::Char(c) => Event::Char(c),
        _ => return None,
    })
}
