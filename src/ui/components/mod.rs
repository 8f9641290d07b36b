//! Composable UI component renderers.
//!
//! Each component draws one part of the frame into a [`Frame`] buffer.
//!
//! # Components
//!
//! - [`navbar`]: Brand and navigation links, on every screen
//! - [`header`]: Centered screen title
//! - [`cards`]: Book card grid
//! - [`form`]: Add/edit inputs and submit button
//! - [`empty`]: Message for an empty collection
//! - [`overlay`]: Details box over a shaded content area
//! - [`footer`]: Status line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Navigation bar]
//! [Border]
//! [Header]            list and form screens only
//! [Content]
//! [Border]
//! [Footer]
//! ```

mod cards;
mod empty;
mod footer;
mod form;
mod header;
mod navbar;
mod overlay;

use crate::ui::helpers::Frame;
use crate::ui::layout::{content_bottom, CONTENT_TOP};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormView, ListView, UIViewModel};

use cards::render_card_grid;
use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use navbar::render_navbar;
use overlay::render_overlay;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.print(&Theme::fg(color));
    frame.print(&"─".repeat(cols));
    frame.print(Theme::reset());
    row + 1
}

/// Renders everything that surrounds the content: navigation bar, borders
/// and footer.
pub fn render_chrome(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) -> usize {
    let mut current_row = render_navbar(frame, 1, &vm.navbar, theme, cols);
    current_row = render_border(frame, current_row, &theme.colors.border, cols);

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    if border_row > current_row {
        render_border(frame, border_row, &theme.colors.border, cols);
    }
    if footer_row > current_row {
        render_footer(frame, footer_row, &vm.footer, theme, cols);
    }
    current_row
}

/// Renders the list screen: header, then the card grid or the empty state.
pub fn render_list_screen(frame: &mut Frame, list: &ListView, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_header(frame, CONTENT_TOP - 1, &list.header, theme, cols);

    if let Some(empty) = &list.empty_state {
        render_empty_state(frame, current_row, empty, theme, cols);
        return;
    }

    render_card_grid(frame, current_row, &list.cards, list.columns, theme, content_bottom(rows));
}

/// Renders the add/edit screen: header, inputs and submit button.
pub fn render_form_screen(frame: &mut Frame, form: &FormView, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_header(frame, CONTENT_TOP - 1, &form.header, theme, cols);
    render_form(frame, current_row, form, theme, cols, content_bottom(rows));
}

/// Renders the details overlay over everything between the navigation bar
/// border and the footer border.
pub fn render_details_overlay(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    if let Some(details) = &vm.overlay {
        render_overlay(frame, CONTENT_TOP - 1, content_bottom(rows), details, theme, cols);
    }
}
