//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading catalogs or configuration.
///
/// Classification and filtering never fail; only the loading boundary does.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading or writing a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
