//! Error handling for the derivation pipeline
//!
//! Messages name the failing stage and the offending parameter values.
//! They never carry lock, key, salt, input material or derived key bytes.

use std::fmt;

use lockkey_hashing::HashError;
use thiserror::Error;

/// Failures raised by a memory-hard KDF backend
#[derive(Debug, Error)]
pub enum KdfError {
    /// The backend rejected the cost parameters or buffer sizes
    #[error("Invalid KDF parameters: {0}")]
    InvalidParameters(String),

    /// The working memory could not be reserved
    #[error("Unable to allocate KDF working memory: {blocks} blocks")]
    WorkingMemory {
        /// Number of 1 KiB blocks requested
        blocks: usize,
    },

    /// The backend failed while hashing
    #[error("KDF backend failure: {0}")]
    Backend(String),
}

/// A primitive failed to initialize or run with the given parameters
#[derive(Debug, Error)]
pub enum InitializationError {
    /// Hash or MAC primitive error
    #[error(transparent)]
    Hash(#[from] HashError),

    /// Memory-hard KDF error
    #[error(transparent)]
    Kdf(#[from] KdfError),

    /// Configuration outside the supported range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Pipeline stage at which a derivation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Validating the KDF configuration
    Configuration,
    /// Building the salt from lock and key
    Salt,
    /// Building the keyed-hash input material
    InputMaterial,
    /// Running the memory-hard KDF
    KeyDerivation,
}

impl Stage {
    /// Stable lowercase name, suitable for logs and metrics labels
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Salt => "salt",
            Self::InputMaterial => "input material",
            Self::KeyDerivation => "key derivation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single error type returned by a derivation
#[derive(Debug, Error)]
#[error("Derivation failed at {stage} stage: {source}")]
pub struct DerivationError {
    stage: Stage,
    #[source]
    source: InitializationError,
}

impl DerivationError {
    /// Wrap `source` as a failure of `stage`
    pub fn new(stage: Stage, source: impl Into<InitializationError>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }

    /// Adapter for `map_err` that tags an error with `stage`
    pub(crate) fn at<E>(stage: Stage) -> impl FnOnce(E) -> Self
    where
        E: Into<InitializationError>,
    {
        move |source| Self::new(stage, source)
    }

    /// The stage that failed
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The underlying initialization failure
    #[must_use]
    pub fn initialization_error(&self) -> &InitializationError {
        &self.source
    }
}

/// Result type for derivation operations
pub type Result<T> = std::result::Result<T, DerivationError>;
