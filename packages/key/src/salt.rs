//! Salt construction
//!
//! The salt is BLAKE2b-256 over the lock followed by the key, absorbed as two
//! separate writes, truncated to its first `salt_len` bytes. Keeping the
//! prefix (not the suffix) is part of the on-wire contract: changing it
//! breaks every previously stored signature.

use std::fmt;

use lockkey_hashing::{HashAlgorithm, Hasher256};
use zeroize::Zeroizing;

use crate::error::InitializationError;
use crate::kdf::config::{MAX_SALT_LEN, MIN_SALT_LEN};

/// Deterministic salt derived from a lock and a key
///
/// Not secret on its own, but it is a fast hash of the key, so it is wiped
/// on drop and never leaves the derivation.
pub struct Salt {
    bytes: Zeroizing<Vec<u8>>,
}

impl Salt {
    /// Raw salt bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Salt length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the salt is empty (never true for a built salt)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt([REDACTED; {} bytes])", self.len())
    }
}

/// Build the salt for `lock` and `key`
///
/// # Errors
///
/// Returns `InitializationError::InvalidConfig` if `salt_len` is outside
/// `8..=32`.
pub fn build_salt(lock: &[u8], key: &[u8], salt_len: usize) -> Result<Salt, InitializationError> {
    if !(MIN_SALT_LEN..=MAX_SALT_LEN).contains(&salt_len) {
        return Err(InitializationError::InvalidConfig(format!(
            "salt length must be in {MIN_SALT_LEN}..={MAX_SALT_LEN}, got {salt_len}"
        )));
    }

    let mut hasher = Hasher256::new(HashAlgorithm::Blake2b256);
    hasher.write(lock);
    hasher.write(key);
    let digest = Zeroizing::new(hasher.sum());

    Ok(Salt {
        bytes: Zeroizing::new(digest[..salt_len].to_vec()),
    })
}
