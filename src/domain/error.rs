//! Error types for the zbooks plugin.
//!
//! Collection, routing and form operations are total and never fail; errors
//! only come from the edges of the plugin (theme files, trace output, plugin
//! configuration). All variants are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for zbooks plugin operations.
///
/// # Examples
///
/// ```
/// use zbooks::ZbooksError;
///
/// fn load_theme() -> Result<(), ZbooksError> {
///     Err(ZbooksError::Theme("unknown color key".to_string()))
/// }
///
/// assert!(load_theme().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ZbooksError {
    /// Theme file could not be parsed or applied.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Converts from `std::io::Error` via `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is present but unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zbooks operations.
pub type Result<T> = std::result::Result<T, ZbooksError>;
