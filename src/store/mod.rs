//! Collection store for the books managed by the plugin.
//!
//! # Modules
//!
//! - `collection`: ordered in-memory collection with add/update/delete
//! - `ids`: strictly monotonic identifier generator

pub mod collection;
pub mod ids;

pub use collection::CollectionStore;
pub use ids::MonotonicIds;
