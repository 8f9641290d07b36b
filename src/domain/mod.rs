//! Domain layer for the zbooks plugin.
//!
//! Holds the book entity and the error types, independent of Zellij APIs and
//! of rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book entity, draft record, identifiers, placeholder rule

pub mod book;
pub mod error;

pub use book::{Book, BookDraft, BookId, PLACEHOLDER_POSTER};
pub use error::{Result, ZbooksError};
