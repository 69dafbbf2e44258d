//! Error handling for the hashing primitives

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Error)]
pub enum HashError {
    /// The keyed hash rejected its key
    #[error("MAC initialization error: {0}")]
    MacInitialization(String),
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
