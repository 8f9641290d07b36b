//! View model types representing renderable UI state.
//!
//! View models are computed by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They carry display-ready data only: the
//! placeholder poster has already been substituted, the card window has
//! already been chosen, and the footer text already matches the input context.
//!
//! # Example
//!
//! ```rust
//! use zbooks::ui::viewmodel::{BookCard, HeaderInfo, ListView};
//!
//! let list = ListView {
//!     header: HeaderInfo { title: " Books (1) ".to_string() },
//!     cards: vec![BookCard {
//!         title: "Dune".to_string(),
//!         author: "Herbert".to_string(),
//!         poster: "https://via.placeholder.com/150".to_string(),
//!         is_selected: true,
//!     }],
//!     columns: 2,
//!     empty_state: None,
//! };
//! assert_eq!(list.cards.len(), 1);
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Navigation bar, rendered on every screen.
    pub navbar: NavBar,

    /// Content area selected by the router.
    pub screen: ScreenView,

    /// Details overlay drawn on top of the screen, if a book is selected.
    pub overlay: Option<DetailsView>,

    /// Help text and status line.
    pub footer: FooterInfo,
}

/// Navigation bar with its links.
#[derive(Debug, Clone)]
pub struct NavBar {
    pub links: Vec<NavLink>,
}

/// One navigation link.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: &'static str,
    /// Key chord that follows the link.
    pub shortcut: &'static str,
    /// Whether the current route is this link's target.
    pub is_active: bool,
}

/// Content area of the frame.
#[derive(Debug, Clone)]
pub enum ScreenView {
    List(ListView),
    Form(FormView),
    /// Unmatched path: nothing is rendered below the navigation bar.
    Blank,
}

/// Card grid for the list screen.
#[derive(Debug, Clone)]
pub struct ListView {
    pub header: HeaderInfo,

    /// Cards inside the visible window, in collection order.
    pub cards: Vec<BookCard>,

    /// Cards per grid row.
    pub columns: usize,

    /// Message shown instead of the grid when the collection is empty.
    pub empty_state: Option<EmptyState>,
}

/// One card of the grid.
///
/// Only the title and author are shown on cards; everything else is
/// reserved for the details overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub title: String,
    pub author: String,
    /// Poster reference with the placeholder already applied.
    pub poster: String,
    pub is_selected: bool,
}

/// The add/edit form.
#[derive(Debug, Clone)]
pub struct FormView {
    pub header: HeaderInfo,
    pub inputs: Vec<InputView>,
    pub submit_label: &'static str,
    pub submit_focused: bool,
}

/// One text input of the form.
#[derive(Debug, Clone)]
pub struct InputView {
    pub placeholder: &'static str,
    pub value: String,
    pub is_focused: bool,
    pub multiline: bool,
}

/// Contents of the details overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub title: String,
    pub poster: String,
    pub isbn: String,
    pub author: String,
    pub description: String,
}

/// Title line above the content.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help for the active input context.
    pub keybindings: String,

    /// Confirmation of the last collection change, cleared on navigation.
    pub status: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
