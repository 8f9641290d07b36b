//! Header component renderer.
//!
//! This module renders the screen title bar with centered text, theme-aware
//! colors, and optional background styling.

use crate::ui::helpers::{center_offset, display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// Displays the title centered horizontally with bold styling and theme colors.
/// Pads the line to fill the entire terminal width.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = display_width(&title);
    let padding = center_offset(title_len, cols);

    frame.position_cursor(row, 1);
    frame.print(Theme::bold());
    frame.print(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        frame.print(&Theme::bg(bg));
    }

    frame.pad(padding);
    frame.print(&title);
    frame.pad(cols.saturating_sub(padding + title_len));

    frame.print(Theme::reset());
    row + 1
}
