//! Book domain model.
//!
//! A [`Book`] is the only entity the plugin manages. Its identifier is owned by
//! the collection store: the `id` field is private and there is no public
//! constructor, so the only way to obtain a `Book` is to add a [`BookDraft`]
//! to a [`CollectionStore`](crate::store::CollectionStore). Edits go through
//! [`Book::revised`], which carries the identifier over unchanged.

use std::fmt;

/// Image reference shown for books whose poster field is empty.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/150";

/// Store-assigned book identifier.
///
/// Identifiers are handed out by a strictly monotonic counter and are never
/// reused within a plugin session, even after the book is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(u64);

impl BookId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the numeric value used in route paths (`/books/edit/{id}`).
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-supplied book fields, without an identifier.
///
/// Produced by the form on submission and consumed by the store's `add`
/// operation. Every field is free text; empty strings are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Image URL. Empty means "render the placeholder".
    pub poster: String,
    /// Long-form text, may contain newlines.
    pub description: String,
}

impl BookDraft {
    /// Convenience constructor used by tests and demos.
    #[must_use]
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        poster: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            poster: poster.into(),
            description: description.into(),
        }
    }
}

/// A book stored in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub poster: String,
    pub description: String,
}

impl Book {
    pub(crate) fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            isbn: draft.isbn,
            title: draft.title,
            author: draft.author,
            poster: draft.poster,
            description: draft.description,
        }
    }

    #[must_use]
    pub const fn id(&self) -> BookId {
        self.id
    }

    /// Returns a copy of this book with every user field replaced by `draft`.
    ///
    /// The identifier is kept, which makes the result suitable for
    /// [`CollectionStore::update`](crate::store::CollectionStore::update).
    ///
    /// # Examples
    ///
    /// ```
    /// use zbooks::domain::BookDraft;
    /// use zbooks::store::CollectionStore;
    ///
    /// let mut store = CollectionStore::new();
    /// let id = store.add(BookDraft::new("1", "Dune", "Herbert", "", "")).id();
    /// let edited = store.get(id).unwrap().revised(BookDraft::new("1", "Dune Messiah", "Herbert", "", ""));
    /// assert_eq!(edited.id(), id);
    /// ```
    #[must_use]
    pub fn revised(&self, draft: BookDraft) -> Self {
        Self::from_draft(self.id, draft)
    }

    /// Returns the user fields as a draft, e.g. to pre-fill the edit form.
    #[must_use]
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            isbn: self.isbn.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            poster: self.poster.clone(),
            description: self.description.clone(),
        }
    }

    /// Returns the poster reference to render: the stored value verbatim, or
    /// [`PLACEHOLDER_POSTER`] when it is empty.
    #[must_use]
    pub fn poster_or_placeholder(&self) -> &str {
        if self.poster.is_empty() {
            PLACEHOLDER_POSTER
        } else {
            &self.poster
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_poster_renders_placeholder() {
        let book = Book::from_draft(BookId::new(1), BookDraft::new("123", "Dune", "Herbert", "", ""));
        assert_eq!(book.poster_or_placeholder(), PLACEHOLDER_POSTER);
    }

    #[test]
    fn non_empty_poster_is_used_verbatim() {
        let poster = "https://covers.example/dune.jpg?size=L";
        let book = Book::from_draft(BookId::new(1), BookDraft::new("", "Dune", "", poster, ""));
        assert_eq!(book.poster_or_placeholder(), poster);
    }

    #[test]
    fn revised_keeps_identifier_and_replaces_fields() {
        let book = Book::from_draft(BookId::new(7), BookDraft::new("1", "a", "b", "c", "d"));
        let edited = book.revised(BookDraft::new("2", "e", "f", "", "h"));

        assert_eq!(edited.id(), BookId::new(7));
        assert_eq!(edited.to_draft(), BookDraft::new("2", "e", "f", "", "h"));
    }
}
