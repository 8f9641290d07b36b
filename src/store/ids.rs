//! Book identifier generation.

use crate::domain::BookId;

/// Strictly monotonic identifier source.
///
/// Every call to [`next_id`](Self::next_id) returns a value greater than all
/// previous ones, so identifiers stay unique for the lifetime of the store
/// regardless of how quickly books are added or how many are deleted.
#[derive(Debug, Clone)]
pub struct MonotonicIds {
    next: u64,
}

impl MonotonicIds {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Hands out the next identifier.
    pub fn next_id(&mut self) -> BookId {
        let id = BookId::new(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for MonotonicIds {
    fn default() -> Self {
        Self::new()
    }
}
