//! Footer component renderer.
//!
//! This module renders the footer help bar: the status line on the left when
//! there is one, and keybinding hints for the active input context.

use crate::ui::helpers::{center_offset, display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Without a status the keybinding hints are centered. With one, the status
/// takes the left edge and the hints are right-aligned in the remaining space.
/// Both are truncated rather than wrapped on narrow panes.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row, 1);

    let mut used = 0;
    if let Some(status) = &footer.status {
        let status = truncate(&format!(" {status} "), cols / 2);
        used = display_width(&status);
        frame.print(Theme::bold());
        frame.print(&Theme::fg(&theme.colors.status_fg));
        frame.print(&status);
        frame.print(Theme::reset());
    }

    let help_text = truncate(&footer.keybindings, cols.saturating_sub(used));
    let text_len = display_width(&help_text);
    let remaining = cols.saturating_sub(used);
    let padding = if footer.status.is_some() {
        remaining.saturating_sub(text_len)
    } else {
        center_offset(text_len, remaining)
    };

    frame.print(&Theme::fg(&theme.colors.text_dim));
    frame.pad(padding);
    frame.print(&help_text);
    frame.pad(remaining.saturating_sub(padding + text_len));
    frame.print(Theme::reset());
    row + 1
}
