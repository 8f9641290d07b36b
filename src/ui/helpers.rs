//! Shared rendering utilities and helpers.
//!
//! Components draw into a [`Frame`], an ANSI buffer addressed by 1-indexed
//! cursor positions, which the plugin prints in one go. The text helpers
//! measure and cut strings by character, never by byte, so multibyte titles
//! do not split in the middle of a code point.
//!
//! # Example
//!
//! ```rust
//! use zbooks::ui::helpers::{truncate, Frame};
//!
//! let mut frame = Frame::new();
//! frame.position_cursor(5, 1);
//! frame.print(&truncate("A very long book title", 10));
//! assert!(frame.as_str().ends_with("A very lo…"));
//! ```

use unicode_width::UnicodeWidthStr as _;

/// ANSI output buffer for one render pass.
#[derive(Debug, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions the cursor at a specific row and column.
    ///
    /// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
    /// 1-indexed.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn print(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Prints `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Display width of `text` in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Cuts `text` to at most `max` cells, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Left padding that centers `len` cells inside `width`.
#[must_use]
pub const fn center_offset(len: usize, width: usize) -> usize {
    width.saturating_sub(len) / 2
}

/// Breaks `text` into lines of at most `width` cells.
///
/// Explicit newlines are kept; long lines break at the last space that fits,
/// or mid-word when a single word is wider than `width`.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split(' ') {
            let candidate_width = if line.is_empty() {
                display_width(word)
            } else {
                display_width(&line) + 1 + display_width(word)
            };

            if candidate_width <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let mut rest = word;
            while display_width(rest) > width {
                let split = split_at_width(rest, width);
                lines.push(rest[..split].to_string());
                rest = &rest[split..];
            }
            line.push_str(rest);
        }
        lines.push(line);
    }

    lines
}

/// Byte index of the longest prefix of `text` that fits in `width` cells.
/// Always advances by at least one character.
fn split_at_width(text: &str, width: usize) -> usize {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            return if idx == 0 { c.len_utf8() } else { idx };
        }
        used += w;
    }
    text.len()
}

/// Removes ANSI escape sequences, leaving the printable text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        // CSI sequences end with a byte in the 0x40..=0x7e range.
        for next in chars.by_ref() {
            if next != '[' && ('\u{40}'..='\u{7e}').contains(&next) {
                break;
            }
        }
    }
    out
}
