//! # lockkey
//!
//! Reproducible key derivation from a lock (a non-secret identifier such as
//! an account id) and a key (a password or pre-shared secret), with a
//! storable signature for later verification.
//!
//! ## Pipeline
//!
//! - **Salt**: BLAKE2b-256 over lock then key, first 16 bytes
//! - **Input material**: HMAC-SHA3-256 keyed by the key over the lock
//! - **Derived key**: Argon2id (64 MiB, 3 passes, 4 lanes) over the material
//! - **Signature**: SHA3-256 over the derived key
//!
//! The derived key never needs to be stored. Store the signature, derive
//! again later and compare with [`DerivedKeyRecord::matches`], which runs in
//! constant time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lockkey::DerivedKeyRecord;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = DerivedKeyRecord::new(b"user@example.com", b"hello, world!")?;
//! assert_eq!(record.key().len(), 32);
//!
//! // Persist the signature, never the key
//! let stored = record.sig().to_string();
//!
//! let candidate = hex::decode(&stored)?;
//! assert!(record.matches(&candidate));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod deriver;
pub mod error;
pub mod kdf;
pub mod key_result;
pub mod material;
pub mod record;
pub mod salt;
pub mod signature;

// Re-export core types
pub use deriver::Deriver;
pub use error::{DerivationError, InitializationError, KdfError, Result, Stage};
pub use kdf::{Argon2idKdf, KdfConfig, KeyDerivationEngine, MemoryHardKdf};
pub use key_result::{DerivedKeyResult, DerivedKeyResultWithHandler};
pub use material::{build_input_material, InputMaterial};
pub use record::{DerivedKey, DerivedKeyRecord};
pub use salt::{build_salt, Salt};
pub use signature::{sign, Signature, SIGNATURE_LEN};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DerivationError, DerivedKey, DerivedKeyRecord, Deriver, KdfConfig, Result, Signature,
    };
}
