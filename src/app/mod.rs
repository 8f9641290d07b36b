//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and
//! store layers. Every user interaction flows one way through it:
//!
//! ```text
//! Key / Pipe → Event → handle_event → AppState callbacks → CollectionStore
//!                                          ↓
//!                          compute_viewmodel → renderer → Actions
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Controlled add/edit form
//! - [`handler`]: Event processing and state transition coordinator
//! - [`keymap`]: Keybindings per input context
//! - [`modes`]: Input context derived from screen and overlay
//! - [`route`]: Path matching and the router
//! - [`state`]: Shell state and view model computation
//!
//! # Example
//!
//! ```rust
//! use zbooks::app::{handle_event, AppState, Event};
//! use zbooks::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), "/books");
//! let (_, actions) = handle_event(&mut state, &Event::CloseFocus);
//! assert_eq!(actions.len(), 1);
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod route;
pub mod state;

pub use actions::Action;
pub use form::{BookForm, EnterOutcome, FormField};
pub use handler::{handle_event, Event};
pub use keymap::{map_key, Key};
pub use modes::InputContext;
pub use route::{Route, Router, ADD_PATH, LIST_PATH};
pub use state::AppState;
