//! Error types for reqtree-cli

use thiserror::Error;

/// Result type alias for reqtree-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in reqtree-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from reqtree-core and the libraries built on it
    #[error(transparent)]
    Core(#[from] reqtree_core::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
