//! Empty state component renderer.
//!
//! This module renders a centered message when the collection holds no books.

use crate::ui::helpers::{center_offset, display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message two rows below `row`.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [centered message]
/// [centered dimmed subtitle]
/// ```
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate(&empty.message, cols);
    let msg_len = display_width(&message);
    let msg_padding = center_offset(msg_len, cols);

    frame.position_cursor(row + 1, 1);
    frame.print(&Theme::fg(&theme.colors.empty_state_fg));
    frame.pad(msg_padding);
    frame.print(&message);
    frame.pad(cols.saturating_sub(msg_padding + msg_len));
    frame.print(Theme::reset());

    let subtitle = truncate(&empty.subtitle, cols);
    let sub_len = display_width(&subtitle);
    let sub_padding = center_offset(sub_len, cols);

    frame.position_cursor(row + 2, 1);
    frame.print(Theme::dim());
    frame.print(&Theme::fg(&theme.colors.text_dim));
    frame.pad(sub_padding);
    frame.print(&subtitle);
    frame.pad(cols.saturating_sub(sub_padding + sub_len));
    frame.print(Theme::reset());
}
