//! Path-based screen routing.
//!
//! The router maps the current navigation path to one of three screens:
//!
//! | Path               | Route                  |
//! |--------------------|------------------------|
//! | `/books`           | [`Route::List`]        |
//! | `/books/add`       | [`Route::AddForm`]     |
//! | `/books/edit/{id}` | [`Route::EditForm`]    |
//!
//! Any other path is unmatched and renders an empty content area. A single
//! trailing slash is tolerated; the `{id}` segment must be a decimal integer.

use crate::domain::BookId;
use std::fmt;

/// Path of the list screen.
pub const LIST_PATH: &str = "/books";
/// Path of the add form.
pub const ADD_PATH: &str = "/books/add";

/// Screen selected by the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Card grid of the whole collection.
    List,
    /// Blank form that adds a new book on submission.
    AddForm,
    /// Form that updates the book with the routed identifier.
    EditForm(BookId),
}

impl Route {
    /// Matches `path` against the route table.
    ///
    /// # Examples
    ///
    /// ```
    /// use zbooks::app::Route;
    ///
    /// assert_eq!(Route::parse("/books"), Some(Route::List));
    /// assert_eq!(Route::parse("/books/add/"), Some(Route::AddForm));
    /// assert!(matches!(Route::parse("/books/edit/42"), Some(Route::EditForm(id)) if id.get() == 42));
    /// assert_eq!(Route::parse("/library"), None);
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);

        match path {
            LIST_PATH => Some(Self::List),
            ADD_PATH => Some(Self::AddForm),
            _ => {
                let raw_id = path.strip_prefix("/books/edit/")?;
                if raw_id.is_empty() || !raw_id.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                raw_id.parse::<u64>().ok().map(|id| Self::EditForm(BookId::new(id)))
            }
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::List => LIST_PATH.to_string(),
            Self::AddForm => ADD_PATH.to_string(),
            Self::EditForm(id) => format!("/books/edit/{id}"),
        }
    }

    /// Identifier carried by the edit route.
    #[must_use]
    pub const fn book_id(self) -> Option<BookId> {
        match self {
            Self::EditForm(id) => Some(id),
            Self::List | Self::AddForm => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Holds the current navigation path and nothing else.
#[derive(Debug, Clone)]
pub struct Router {
    path: String,
}

impl Router {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Moves to `path`. Returns `true` if the path changed.
    pub fn navigate(&mut self, path: &str) -> bool {
        if self.path == path {
            return false;
        }
        tracing::debug!(from = %self.path, to = %path, "navigating");
        self.path = path.to_string();
        true
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Route matched by the current path, `None` when unmatched.
    #[must_use]
    pub fn current(&self) -> Option<Route> {
        Route::parse(&self.path)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(LIST_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_three_screens() {
        assert_eq!(Route::parse("/books"), Some(Route::List));
        assert_eq!(Route::parse("/books/add"), Some(Route::AddForm));
        assert_eq!(Route::parse("/books/edit/17"), Some(Route::EditForm(BookId::new(17))));
    }

    #[test]
    fn tolerates_one_trailing_slash() {
        assert_eq!(Route::parse("/books/"), Some(Route::List));
        assert_eq!(Route::parse("/books/edit/3/"), Some(Route::EditForm(BookId::new(3))));
        assert_eq!(Route::parse("/books//"), None);
    }

    #[test]
    fn unmatched_paths() {
        for path in ["", "/", "/book", "/BOOKS", "/books/edit", "/books/edit/", "/books/edit/abc", "/books/edit/-1", "/books/edit/1/2", "/books/add/extra"] {
            assert_eq!(Route::parse(path), None, "{path} should not match");
        }
    }

    #[test]
    fn edit_path_uses_the_identifier() {
        assert_eq!(Route::EditForm(BookId::new(5)).path(), "/books/edit/5");
        assert_eq!(Route::EditForm(BookId::new(5)).book_id(), Some(BookId::new(5)));
        assert_eq!(Route::List.book_id(), None);
    }

    #[test]
    fn router_reports_path_changes() {
        let mut router = Router::default();
        assert_eq!(router.current(), Some(Route::List));
        assert!(!router.navigate("/books"));
        assert!(router.navigate("/nowhere"));
        assert_eq!(router.current(), None);
        assert_eq!(router.path(), "/nowhere");
    }
}
