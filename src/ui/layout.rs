//! Frame geometry shared by the view model computation and the components.
//!
//! ```text
//! row 1        navigation bar
//! row 2        border
//! row 3        screen header
//! rows 4..     content (card grid, form)
//! rows - 1     border
//! rows         footer
//! ```

/// Width of a card including its border.
pub const CARD_WIDTH: usize = 30;

/// Height of a card including its border.
pub const CARD_HEIGHT: usize = 6;

/// Horizontal space between two cards.
pub const CARD_GAP: usize = 2;

/// Left margin of the content area.
pub const CONTENT_MARGIN: usize = 2;

/// First content row below the navigation bar, border and header.
pub const CONTENT_TOP: usize = 4;

/// Rows taken by navigation bar, header, borders and footer.
pub const CHROME_ROWS: usize = 5;

/// Number of cards that fit side by side.
#[must_use]
pub const fn grid_columns(cols: usize) -> usize {
    let usable = cols.saturating_sub(CONTENT_MARGIN) + CARD_GAP;
    let columns = usable / (CARD_WIDTH + CARD_GAP);
    if columns == 0 {
        1
    } else {
        columns
    }
}

/// Number of card rows that fit between header and footer.
#[must_use]
pub const fn visible_card_rows(rows: usize) -> usize {
    let fit = rows.saturating_sub(CHROME_ROWS) / CARD_HEIGHT;
    if fit == 0 {
        1
    } else {
        fit
    }
}

/// Last row available to content.
#[must_use]
pub const fn content_bottom(rows: usize) -> usize {
    rows.saturating_sub(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_never_collapses_to_zero() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(20), 1);
        assert_eq!(visible_card_rows(3), 1);
    }

    #[test]
    fn wide_panes_hold_several_cards() {
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(100), 3);
        assert_eq!(visible_card_rows(24), 3);
    }
}
