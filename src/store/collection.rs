//! In-memory book collection.
//!
//! [`CollectionStore`] is the single source of truth for the books shown by
//! the plugin. It applies exactly three state transitions (add, update,
//! delete), each a synchronous total function of the current contents and its
//! input. Nothing is persisted; the collection lives as long as the plugin
//! instance.
//!
//! # Ordering
//!
//! Books are kept in insertion order. `update` replaces an element in place
//! and `delete` removes one element without reordering the rest.
//!
//! # Change tracking
//!
//! Every successful mutation bumps [`CollectionStore::revision`]. The event
//! handler uses the returned flags to decide whether the UI must re-render.

use crate::domain::{Book, BookDraft, BookId};
use crate::store::ids::MonotonicIds;

/// Ordered, in-memory collection of books.
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    books: Vec<Book>,
    ids: MonotonicIds,
    revision: u64,
}

impl CollectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new book built from `draft` and returns it.
    ///
    /// The book receives a fresh identifier and is appended to the end of the
    /// collection. Always succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use zbooks::domain::BookDraft;
    /// use zbooks::store::CollectionStore;
    ///
    /// let mut store = CollectionStore::new();
    /// let first = store.add(BookDraft::default()).id();
    /// let second = store.add(BookDraft::default()).id();
    /// assert_ne!(first, second);
    /// assert_eq!(store.len(), 2);
    /// ```
    pub fn add(&mut self, draft: BookDraft) -> &Book {
        let id = self.ids.next_id();
        let _span = tracing::debug_span!("store_add", book_id = %id, title = %draft.title).entered();

        self.books.push(Book::from_draft(id, draft));
        self.revision += 1;

        tracing::debug!(count = self.books.len(), "book added");
        &self.books[self.books.len() - 1]
    }

    /// Replaces the book whose identifier matches `book.id()`.
    ///
    /// The element keeps its position. Returns `false` and leaves the
    /// collection untouched when no book has that identifier.
    pub fn update(&mut self, book: Book) -> bool {
        let _span = tracing::debug_span!("store_update", book_id = %book.id()).entered();

        let Some(slot) = self.books.iter_mut().find(|existing| existing.id() == book.id()) else {
            tracing::debug!("no book with this id, update ignored");
            return false;
        };

        *slot = book;
        self.revision += 1;
        tracing::debug!("book updated");
        true
    }

    /// Removes the book with identifier `id`.
    ///
    /// Returns `false` when no book matches.
    pub fn delete(&mut self, id: BookId) -> bool {
        let _span = tracing::debug_span!("store_delete", book_id = %id).entered();

        let Some(index) = self.position(id) else {
            tracing::debug!("no book with this id, delete ignored");
            return false;
        };

        self.books.remove(index);
        self.revision += 1;
        tracing::debug!(count = self.books.len(), "book deleted");
        true
    }

    /// All books in collection order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    /// Index of the book with identifier `id` within [`books`](Self::books).
    #[must_use]
    pub fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Number of successful mutations applied so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn draft(title: &str) -> BookDraft {
        BookDraft::new("isbn", title, "author", "", "")
    }

    fn titles(store: &CollectionStore) -> Vec<&str> {
        store.books().iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn add_appends_with_unique_ids() {
        let mut store = CollectionStore::new();
        let ids: Vec<BookId> = (0..50).map(|i| store.add(draft(&format!("book {i}"))).id()).collect();

        assert_eq!(store.len(), 50);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 50);
        assert_eq!(store.books().last().map(|b| b.title.as_str()), Some("book 49"));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = CollectionStore::new();
        let first = store.add(draft("a")).id();
        assert!(store.delete(first));

        let second = store.add(draft("b")).id();
        assert_ne!(first, second);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = CollectionStore::new();
        store.add(draft("a"));
        let id = store.add(draft("b")).id();
        store.add(draft("c"));

        let edited = store.get(id).unwrap().revised(BookDraft::new("9", "B", "Someone", "p.png", "long"));
        assert!(store.update(edited.clone()));

        assert_eq!(store.len(), 3);
        assert_eq!(titles(&store), vec!["a", "B", "c"]);
        assert_eq!(store.books()[1], edited);
    }

    #[test]
    fn update_with_unknown_id_is_a_no_op() {
        let mut other = CollectionStore::new();
        other.add(draft("x"));
        let stranger = other.add(draft("y")).clone();

        let mut store = CollectionStore::new();
        store.add(draft("a"));
        let before = store.books().to_vec();
        let revision = store.revision();

        assert!(!store.update(stranger));
        assert_eq!(store.books(), before.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut store = CollectionStore::new();
        store.add(draft("a"));
        let id = store.add(draft("b")).id();
        store.add(draft("c"));
        store.add(draft("d"));

        assert!(store.delete(id));
        assert_eq!(titles(&store), vec!["a", "c", "d"]);
        assert!(store.get(id).is_none());
    }

    #[test]
    fn delete_with_unknown_id_is_a_no_op() {
        let mut store = CollectionStore::new();
        let id = store.add(draft("a")).id();
        assert!(store.delete(id));

        let revision = store.revision();
        assert!(!store.delete(id));
        assert!(store.is_empty());
        assert_eq!(store.revision(), revision);
    }
}
