//! Details overlay renderer.
//!
//! Shades the whole content area and draws a centered box with every field of
//! the selected book. The box is drawn after the screen, so it covers the
//! cards or form underneath.

use crate::ui::helpers::{center_offset, display_width, truncate, wrap, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailsView;

const MAX_BOX_WIDTH: usize = 64;
const CLOSE_MARK: &str = "×";

/// Renders the overlay over rows `top..=bottom`.
pub fn render_overlay(frame: &mut Frame, top: usize, bottom: usize, details: &DetailsView, theme: &Theme, cols: usize) {
    let shade = Theme::bg(&theme.colors.overlay_shade);
    for row in top..=bottom {
        frame.position_cursor(row, 1);
        frame.print(&shade);
        frame.pad(cols);
        frame.print(Theme::reset());
    }

    let width = cols.saturating_sub(4).min(MAX_BOX_WIDTH);
    if width < 6 || bottom < top + 2 {
        return;
    }
    let text_width = width - 4;
    let available = bottom + 1 - top - 2;

    let mut body = details_lines(details, text_width);
    if body.len() > available {
        body.truncate(available);
        if let Some(last) = body.last_mut() {
            last.0 = truncate(&format!("{}…", last.0), text_width);
        }
    }

    let height = body.len() + 2;
    let row = top + center_offset(height, bottom + 1 - top);
    let col = center_offset(width, cols) + 1;
    let border = Theme::fg(&theme.colors.overlay_border);

    let title = truncate(&format!(" {} ", details.title), width.saturating_sub(6));
    frame.position_cursor(row, col);
    frame.print(&shade);
    frame.print(&border);
    frame.print("┌");
    frame.print(Theme::bold());
    frame.print(&Theme::fg(&theme.colors.header_fg));
    frame.print(&title);
    frame.print(Theme::reset());
    frame.print(&shade);
    frame.print(&border);
    frame.print(&"─".repeat(width.saturating_sub(display_width(&title) + 6)));
    frame.print(&format!(" {CLOSE_MARK} ─┐"));

    for (offset, (line, emphasis)) in body.iter().enumerate() {
        frame.position_cursor(row + 1 + offset, col);
        frame.print(&border);
        frame.print("│ ");
        frame.print(Theme::reset());
        frame.print(&shade);
        if *emphasis {
            frame.print(Theme::bold());
            frame.print(&Theme::fg(&theme.colors.text_normal));
        } else {
            frame.print(&Theme::fg(&theme.colors.text_dim));
        }
        frame.print(line);
        frame.pad(text_width.saturating_sub(display_width(line)));
        frame.print(Theme::reset());
        frame.print(&shade);
        frame.print(&border);
        frame.print(" │");
    }

    frame.position_cursor(row + height - 1, col);
    frame.print(&border);
    frame.print(&format!("└{}┘", "─".repeat(width - 2)));
    frame.print(Theme::reset());
}

/// Body rows of the box. The flag marks field values, which are drawn
/// brighter than their labels.
fn details_lines(details: &DetailsView, width: usize) -> Vec<(String, bool)> {
    let mut lines = Vec::new();
    for (label, value) in [
        ("Poster", &details.poster),
        ("ISBN", &details.isbn),
        ("Author", &details.author),
    ] {
        lines.push((format!("{label}:"), false));
        lines.extend(wrap(value, width).into_iter().map(|l| (l, true)));
    }
    lines.push((String::new(), false));
    lines.push(("Description:".to_string(), false));
    lines.extend(wrap(&details.description, width).into_iter().map(|l| (l, true)));
    lines
}
