//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`; this module maps user-facing
//! paths onto it.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
