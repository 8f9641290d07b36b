//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting both
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! nav_link_fg = "#a6adc8"
//! nav_active_fg = "#1e1e2e"
//! nav_active_bg = "#89b4fa"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! card_border = "#585b70"
//! input_border = "#585b70"
//! input_focus_border = "#f5c2e7"
//! button_fg = "#1e1e2e"
//! button_bg = "#a6e3a1"
//! danger_fg = "#f38ba8"
//! overlay_border = "#cba6f7"
//! overlay_shade = "#11111b"
//! empty_state_fg = "#89b4fa"
//! status_fg = "#a6e3a1"
//! ```
//!
//! # Example
//!
//! ```rust
//! use zbooks::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! print!("{}", Theme::fg(&theme.colors.header_fg));
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{Result, ZbooksError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4"). Optional fields
/// default to `None`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Screen header text color.
    pub header_fg: String,
    /// Optional screen header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Inactive navigation link.
    pub nav_link_fg: String,
    /// Navigation link of the current route.
    pub nav_active_fg: String,
    pub nav_active_bg: String,

    /// Highlighted card title.
    pub selection_fg: String,
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, authors, placeholders).
    pub text_dim: String,

    /// Separator lines.
    pub border: String,
    pub card_border: String,
    pub input_border: String,
    pub input_focus_border: String,

    /// Form submit button.
    pub button_fg: String,
    pub button_bg: String,

    /// Delete action on cards.
    pub danger_fg: String,

    /// Details overlay box.
    pub overlay_border: String,
    /// Background painted over the screen behind the overlay.
    pub overlay_shade: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Footer status line.
    pub status_fg: String,
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const BUILT_IN: [&'static str; 2] = ["catppuccin-mocha", "catppuccin-latte"];

    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use zbooks::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZbooksError::Io`] if the file cannot be read and
    /// [`ZbooksError::Theme`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| ZbooksError::Theme(e.to_string()))
    }

    /// Converts a hex color to an RGB tuple. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zbooks::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests below rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        for name in Theme::BUILT_IN {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#12"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("zzzzzz"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
    }

    #[test]
    fn theme_file_round_trip() {
        let theme = Theme::from_name("catppuccin-latte").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded.colors.selection_bg, theme.colors.selection_bg);
    }

    #[test]
    fn theme_file_errors_are_typed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(ZbooksError::Theme(_))));
        assert!(matches!(Theme::from_file("/nonexistent/theme.toml"), Err(ZbooksError::Io(_))));
    }
}
