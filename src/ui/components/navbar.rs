//! Navigation bar renderer.

use crate::ui::helpers::{display_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavBar;

const BRAND: &str = " zbooks ";

/// Renders the brand and the navigation links on one row.
///
/// The link for the current route is drawn with the active colors; the others
/// use the plain link color. Links that do not fit are dropped from the right.
pub fn render_navbar(frame: &mut Frame, row: usize, navbar: &NavBar, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row, 1);

    let mut used = 0;
    if display_width(BRAND) <= cols {
        frame.print(Theme::bold());
        frame.print(&Theme::fg(&theme.colors.header_fg));
        frame.print(BRAND);
        frame.print(Theme::reset());
        used += display_width(BRAND);
    }

    for link in &navbar.links {
        let text = format!(" {} ({}) ", link.label, link.shortcut);
        let width = display_width(&text) + 1;
        if used + width > cols {
            break;
        }

        frame.pad(1);
        if link.is_active {
            frame.print(Theme::bold());
            frame.print(&Theme::fg(&theme.colors.nav_active_fg));
            frame.print(&Theme::bg(&theme.colors.nav_active_bg));
        } else {
            frame.print(&Theme::fg(&theme.colors.nav_link_fg));
        }
        frame.print(&text);
        frame.print(Theme::reset());
        used += width;
    }

    frame.pad(cols.saturating_sub(used));
    row + 1
}
