//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled frames through composable
//! rendering components. It provides theme support and a responsive card grid.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Frame buffer and text measuring utilities
//! - [`layout`]: Frame geometry shared by view models and components
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    BookCard, DetailsView, EmptyState, FooterInfo, FormView, HeaderInfo, InputView, ListView, NavBar,
    NavLink, ScreenView, UIViewModel,
};
