//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The result is a single ANSI string; the plugin prints it in one call.
//!
//! # Example
//!
//! ```rust
//! use zbooks::app::AppState;
//! use zbooks::ui::{helpers::strip_ansi, render, Theme};
//!
//! let state = AppState::new(Theme::default(), "/books");
//! let frame = render(&state, 24, 80);
//! assert!(strip_ansi(&frame).contains("No books yet"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ScreenView, UIViewModel};

/// Renders the plugin UI for a pane of `rows` x `cols`.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a view model. The screen is drawn first and the overlay last, so
/// the overlay covers it.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut frame = Frame::new();

    components::render_chrome(&mut frame, vm, theme, cols, rows);

    match &vm.screen {
        ScreenView::List(list) => components::render_list_screen(&mut frame, list, theme, cols, rows),
        ScreenView::Form(form) => components::render_form_screen(&mut frame, form, theme, cols, rows),
        ScreenView::Blank => {}
    }

    components::render_details_overlay(&mut frame, vm, theme, cols, rows);

    frame.into_string()
}
