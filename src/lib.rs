//! zbooks: a Zellij plugin for keeping a list of books.
//!
//! The plugin shows a navigation bar and one of three screens, selected by a
//! path-based router:
//! - `/books`: card grid of every book, with a details overlay
//! - `/books/add`: form that appends a new book
//! - `/books/edit/{id}`: the same form, pre-filled, updating the book in place
//!
//! The collection lives in memory for the lifetime of the plugin pane.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, pipes
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Router and routes                                │
//! │  - Shell state, form state                          │
//! │  - Event handling, view model computation           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ Store (store/)        │   │ UI Layer (ui/)          │
//! │ - CollectionStore     │   │ - Components, layout    │
//! │ - Monotonic ids       │   │ - Themes                │
//! └───────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), Infrastructure (infrastructure/) │
//! │  Observability (observability/)                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zbooks.wasm" {
//!         start_path "/books"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zbooks::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::Navigate("/books/add".to_string()));
//! for c in "Dune".chars() {
//!     handle_event(&mut state, &Event::Char(c));
//! }
//! handle_event(&mut state, &Event::SubmitForm);
//!
//! assert_eq!(state.books().len(), 1);
//! assert_eq!(state.books()[0].isbn, "Dune");
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, map_key, Action, AppState, Event, InputContext, Key, Route};
pub use domain::{Book, BookDraft, BookId, Result, ZbooksError};
pub use store::CollectionStore;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/zbooks.wasm" {
///     start_path "/books/add"
///     theme "catppuccin-mocha"
///     theme_file "~/themes/books.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Path the router starts at. Default: `/books`
    pub start_path: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_path: app::LIST_PATH.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unusable values are logged and replaced by their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zbooks::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("start_path".to_string(), "/books/add".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.start_path, "/books/add");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let start_path = config.get("start_path").map_or_else(
            || app::LIST_PATH.to_string(),
            |raw| {
                Self::parse_start_path(raw).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "ignoring start_path");
                    app::LIST_PATH.to_string()
                })
            },
        );

        let non_empty = |key: &str| config.get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            start_path,
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
        }
    }

    /// Accepts any absolute path, matched or not; the router renders unmatched
    /// paths as a blank screen.
    ///
    /// # Errors
    ///
    /// [`ZbooksError::Config`] when the value is empty or not absolute.
    pub fn parse_start_path(raw: &str) -> Result<String> {
        let path = raw.trim();
        if !path.starts_with('/') {
            return Err(ZbooksError::Config(format!("start_path must begin with '/', got {raw:?}")));
        }
        Ok(path.to_string())
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    /// Failures are logged and fall through to the default theme.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(infrastructure::expand_tilde(theme_file)) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    return Theme::default();
                }
            }
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Initializes the plugin state from configuration.
///
/// Returns an empty collection routed to `config.start_path`. Tracing is set
/// up separately by [`observability::init_tracing`], before this is called.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(start_path = %config.start_path, "initializing zbooks plugin");

    AppState::new(config.resolve_theme(), &config.start_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.start_path, "/books");
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn relative_start_path_falls_back() {
        let config = Config::from_zellij(&map(&[("start_path", "books/add")]));
        assert_eq!(config.start_path, "/books");
        assert!(matches!(Config::parse_start_path(""), Err(ZbooksError::Config(_))));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", "debug")]));
        assert!(config.theme_name.is_none());
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn theme_resolution_order() {
        let mut config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "catppuccin-latte");

        config.theme_name = Some("no-such-theme".to_string());
        assert_eq!(config.resolve_theme().name, "catppuccin-mocha");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = Theme {
            name: "custom".to_string(),
            ..Theme::default()
        };
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();
        config.theme_file = Some(file.path().to_string_lossy().into_owned());
        assert_eq!(config.resolve_theme().name, "custom");
    }

    #[test]
    fn initialize_honours_start_path() {
        let config = Config {
            start_path: "/books/add".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.input_context(), InputContext::Form);
    }
}
