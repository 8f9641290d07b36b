//! Card grid renderer for the book list.
//!
//! Each card is a bordered box of [`CARD_WIDTH`] x [`CARD_HEIGHT`] cells:
//!
//! ```text
//! ┌────────────────────────────┐
//! │ Dune                       │
//! │ Frank Herbert              │
//! │ ▨ https://via.placeholder… │
//! │ Details  Edit  Delete      │
//! └────────────────────────────┘
//! ```
//!
//! The highlighted card gets the selection colors on its border and title.

use crate::ui::helpers::{display_width, truncate, Frame};
use crate::ui::layout::{CARD_GAP, CARD_HEIGHT, CARD_WIDTH, CONTENT_MARGIN};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BookCard;

const INNER_WIDTH: usize = CARD_WIDTH - 2;
const TEXT_WIDTH: usize = INNER_WIDTH - 2;

/// Renders the visible cards in rows of `columns`, starting at `row`.
///
/// Card rows that would extend past `bottom` are not drawn.
///
/// # Returns
///
/// The row following the last card row drawn.
pub fn render_card_grid(
    frame: &mut Frame,
    row: usize,
    cards: &[BookCard],
    columns: usize,
    theme: &Theme,
    bottom: usize,
) -> usize {
    let mut next_row = row;
    for (index, chunk) in cards.chunks(columns.max(1)).enumerate() {
        let top = row + index * CARD_HEIGHT;
        if top + CARD_HEIGHT - 1 > bottom {
            break;
        }
        for (column, card) in chunk.iter().enumerate() {
            let col = CONTENT_MARGIN + 1 + column * (CARD_WIDTH + CARD_GAP);
            render_card(frame, top, col, card, theme);
        }
        next_row = top + CARD_HEIGHT;
    }
    next_row
}

fn render_card(frame: &mut Frame, row: usize, col: usize, card: &BookCard, theme: &Theme) {
    let border = if card.is_selected {
        Theme::fg(&theme.colors.selection_bg)
    } else {
        Theme::fg(&theme.colors.card_border)
    };

    frame.position_cursor(row, col);
    frame.print(&border);
    frame.print(&format!("┌{}┐", "─".repeat(INNER_WIDTH)));

    let title = if card.title.is_empty() { "(untitled)" } else { &card.title };
    let title_style = if card.is_selected {
        format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal))
    };
    render_line(frame, row + 1, col, &border, &title_style, title);
    render_line(frame, row + 2, col, &border, &Theme::fg(&theme.colors.text_dim), &card.author);
    render_line(
        frame,
        row + 3,
        col,
        &border,
        &format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        &format!("▨ {}", card.poster),
    );

    frame.position_cursor(row + 4, col);
    frame.print(&border);
    frame.print("│ ");
    frame.print(Theme::reset());
    frame.print(&Theme::fg(&theme.colors.text_normal));
    frame.print("Details  Edit  ");
    frame.print(&Theme::fg(&theme.colors.danger_fg));
    frame.print("Delete");
    frame.pad(TEXT_WIDTH.saturating_sub(display_width("Details  Edit  Delete")));
    frame.print(Theme::reset());
    frame.print(&border);
    frame.print(" │");

    frame.position_cursor(row + 5, col);
    frame.print(&format!("└{}┘", "─".repeat(INNER_WIDTH)));
    frame.print(Theme::reset());
}

fn render_line(frame: &mut Frame, row: usize, col: usize, border: &str, style: &str, text: &str) {
    let text = truncate(text, TEXT_WIDTH);

    frame.position_cursor(row, col);
    frame.print(border);
    frame.print("│ ");
    frame.print(Theme::reset());
    frame.print(style);
    frame.print(&text);
    frame.pad(TEXT_WIDTH.saturating_sub(display_width(&text)));
    frame.print(Theme::reset());
    frame.print(border);
    frame.print(" │");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    fn card(title: &str, selected: bool) -> BookCard {
        BookCard {
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            poster: "cover.png".to_string(),
            is_selected: selected,
        }
    }

    #[test]
    fn rows_past_the_bottom_are_skipped() {
        let mut frame = Frame::new();
        let cards = vec![card("a", true), card("b", false), card("c", false)];

        // Room for exactly one row of two cards.
        let next = render_card_grid(&mut frame, 4, &cards, 2, &Theme::default(), 10);
        assert_eq!(next, 10);

        let text = strip_ansi(frame.as_str());
        assert!(text.contains("│ a "));
        assert!(text.contains("│ b "));
        assert!(!text.contains("│ c "));
    }

    #[test]
    fn long_titles_are_cut_to_the_card() {
        let mut frame = Frame::new();
        let long = "The Hitchhiker's Guide to the Galaxy";
        render_card_grid(&mut frame, 4, &[card(long, false)], 1, &Theme::default(), 20);

        let text = strip_ansi(frame.as_str());
        assert!(text.contains("The Hitchhiker's Guide to…"));
        assert!(text.contains("Details  Edit  Delete"));
    }
}
