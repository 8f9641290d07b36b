//! Add/edit form renderer.
//!
//! Inputs are drawn as bordered boxes, one under the other, with the submit
//! button below them. The description input grows to use the rows that are
//! left over and always shows its last lines so the caret stays visible.

use crate::ui::helpers::{display_width, truncate, wrap, Frame};
use crate::ui::layout::CONTENT_MARGIN;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormView, InputView};
use unicode_width::UnicodeWidthChar;

const MAX_FORM_WIDTH: usize = 64;
const MIN_MULTILINE_ROWS: usize = 1;
const MAX_MULTILINE_ROWS: usize = 6;
const CARET: char = '▏';

/// Renders the form inputs and the submit button from `row` down to `bottom`.
pub fn render_form(frame: &mut Frame, row: usize, form: &FormView, theme: &Theme, cols: usize, bottom: usize) {
    let width = cols.saturating_sub(CONTENT_MARGIN * 2).min(MAX_FORM_WIDTH).max(8);
    let col = CONTENT_MARGIN + 1;

    // Single-line inputs take three rows each; the button takes two with its gap.
    let single_rows: usize = form.inputs.iter().filter(|i| !i.multiline).count() * 3;
    let spare = (bottom + 1).saturating_sub(row + single_rows + 2 + 2);
    let multiline_rows = spare.clamp(MIN_MULTILINE_ROWS, MAX_MULTILINE_ROWS);

    let mut current_row = row;
    for input in &form.inputs {
        let lines = if input.multiline { multiline_rows } else { 1 };
        if current_row + lines + 1 > bottom {
            break;
        }
        current_row = render_input(frame, current_row, col, width, lines, input, theme);
    }

    if current_row < bottom {
        render_button(frame, current_row + 1, col, form, theme);
    }
}

fn render_input(
    frame: &mut Frame,
    row: usize,
    col: usize,
    width: usize,
    lines: usize,
    input: &InputView,
    theme: &Theme,
) -> usize {
    let inner = width.saturating_sub(2);
    let text_width = inner.saturating_sub(2);
    let border = if input.is_focused {
        Theme::fg(&theme.colors.input_focus_border)
    } else {
        Theme::fg(&theme.colors.input_border)
    };

    let label = truncate(&format!(" {} ", input.placeholder), inner);
    frame.position_cursor(row, col);
    frame.print(&border);
    frame.print("┌");
    if input.is_focused {
        frame.print(Theme::bold());
    }
    frame.print(&label);
    frame.print(Theme::reset());
    frame.print(&border);
    frame.print(&"─".repeat(inner.saturating_sub(display_width(&label))));
    frame.print("┐");

    let content = visible_lines(input, text_width, lines);
    for (offset, line) in content.iter().enumerate() {
        frame.position_cursor(row + 1 + offset, col);
        frame.print(&border);
        frame.print("│ ");
        frame.print(Theme::reset());
        if input.value.is_empty() && !input.is_focused {
            frame.print(Theme::dim());
            frame.print(&Theme::fg(&theme.colors.text_dim));
        } else {
            frame.print(&Theme::fg(&theme.colors.text_normal));
        }
        frame.print(line);
        frame.pad(text_width.saturating_sub(display_width(line)));
        frame.print(Theme::reset());
        frame.print(&border);
        frame.print(" │");
    }

    frame.position_cursor(row + 1 + lines, col);
    frame.print(&border);
    frame.print(&format!("└{}┘", "─".repeat(inner)));
    frame.print(Theme::reset());

    row + lines + 2
}

/// Text rows shown inside an input box, caret included.
fn visible_lines(input: &InputView, width: usize, lines: usize) -> Vec<String> {
    if input.value.is_empty() && !input.is_focused {
        let mut rows = vec![truncate(input.placeholder, width)];
        rows.resize(lines, String::new());
        return rows;
    }

    let mut value = input.value.clone();
    if input.is_focused {
        value.push(CARET);
    }

    if !input.multiline {
        // Keep the tail in view while typing past the box edge.
        let mut tail = Vec::new();
        let mut used = 0;
        for c in value.chars().rev() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            tail.push(c);
        }
        return vec![tail.into_iter().rev().collect()];
    }

    let wrapped = wrap(&value, width);
    let skip = wrapped.len().saturating_sub(lines);
    let mut rows: Vec<String> = wrapped.into_iter().skip(skip).collect();
    rows.resize(lines, String::new());
    rows
}

fn render_button(frame: &mut Frame, row: usize, col: usize, form: &FormView, theme: &Theme) {
    let label = if form.submit_focused {
        format!("▶ {} ◀", form.submit_label)
    } else {
        format!("  {}  ", form.submit_label)
    };

    frame.position_cursor(row, col);
    if form.submit_focused {
        frame.print(Theme::bold());
        frame.print(&Theme::fg(&theme.colors.selection_fg));
        frame.print(&Theme::bg(&theme.colors.selection_bg));
    } else {
        frame.print(&Theme::fg(&theme.colors.button_fg));
        frame.print(&Theme::bg(&theme.colors.button_bg));
    }
    frame.print(&label);
    frame.print(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(value: &str, focused: bool, multiline: bool) -> InputView {
        InputView {
            placeholder: "Title",
            value: value.to_string(),
            is_focused: focused,
            multiline,
        }
    }

    #[test]
    fn empty_unfocused_input_shows_placeholder() {
        assert_eq!(visible_lines(&input("", false, false), 20, 1), vec!["Title"]);
    }

    #[test]
    fn focused_input_scrolls_to_caret() {
        let rows = visible_lines(&input("abcdefghij", true, false), 5, 1);
        assert_eq!(rows, vec!["ghij▏"]);
    }

    #[test]
    fn multiline_input_keeps_last_lines() {
        let rows = visible_lines(&input("one\ntwo\nthree", false, true), 10, 2);
        assert_eq!(rows, vec!["two", "three"]);

        let rows = visible_lines(&input("one", false, true), 10, 3);
        assert_eq!(rows, vec!["one", "", ""]);
    }
}
