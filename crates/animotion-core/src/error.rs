//! Error types for the animation model.

use thiserror::Error;

/// Result type for catalog and model operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while looking up or parsing model values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog entry carries the requested id.
    #[error("animation not found: {0}")]
    NotFound(String),

    /// A keyword did not name a known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A keyword did not name a known fill mode.
    #[error("unknown fill mode: {0}")]
    UnknownFillMode(String),

    /// A keyword did not name a known code format.
    #[error("unknown code format: {0}")]
    UnknownFormat(String),
}
