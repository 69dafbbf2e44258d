//! Key Derivation Function Configuration
//!
//! The cost parameters are part of the derivation contract: a signature can
//! only be reproduced with exactly the configuration that produced it.
//! `KdfConfig::default()` is that contract for every record made with
//! `DerivedKeyRecord::new`.

use lockkey_hashing::DIGEST_LEN;
use serde::{Deserialize, Serialize};

use crate::error::KdfError;

/// Memory cost in KiB (64 MiB)
pub const DEFAULT_MEMORY_COST: u32 = 64 * 1024;
/// Number of passes over memory
pub const DEFAULT_ITERATIONS: u32 = 3;
/// Number of lanes
pub const DEFAULT_PARALLELISM: u32 = 4;
/// Salt length in bytes
pub const DEFAULT_SALT_LEN: usize = 16;
/// Derived key length in bytes
pub const DEFAULT_KEY_LEN: usize = 32;

/// Smallest salt Argon2 accepts
pub const MIN_SALT_LEN: usize = 8;
/// The salt is a digest prefix, so it cannot outgrow the digest
pub const MAX_SALT_LEN: usize = DIGEST_LEN;
/// Smallest output Argon2 accepts
pub const MIN_KEY_LEN: usize = 4;
/// Largest lane count Argon2 accepts
pub const MAX_PARALLELISM: u32 = 0x00FF_FFFF;

/// Key derivation configuration
/// Parameters for controlling the memory-hard KDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KdfConfig {
    /// Memory cost in KiB
    pub memory_cost: u32,
    /// Number of iterations (time cost)
    pub iterations: u32,
    /// Parallelism factor (lanes)
    pub parallelism: u32,
    /// Salt size in bytes
    pub salt_len: usize,
    /// Output key size in bytes
    pub key_len: usize,
}

impl KdfConfig {
    /// The frozen production parameters: 64 MiB, 3 passes, 4 lanes,
    /// 16-byte salt, 32-byte key
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            memory_cost: DEFAULT_MEMORY_COST,
            iterations: DEFAULT_ITERATIONS,
            parallelism: DEFAULT_PARALLELISM,
            salt_len: DEFAULT_SALT_LEN,
            key_len: DEFAULT_KEY_LEN,
        }
    }

    /// Minimum-cost parameters for tests and benchmarks
    ///
    /// Offers no brute-force resistance. Keys derived with this profile do
    /// not match keys derived with [`KdfConfig::standard`].
    #[must_use]
    pub const fn low_cost() -> Self {
        Self {
            memory_cost: 8 * DEFAULT_PARALLELISM,
            iterations: 1,
            parallelism: DEFAULT_PARALLELISM,
            salt_len: DEFAULT_SALT_LEN,
            key_len: DEFAULT_KEY_LEN,
        }
    }

    /// Check the parameters against the ranges Argon2id supports
    ///
    /// # Errors
    ///
    /// Returns `KdfError::InvalidParameters` naming the first parameter that
    /// is out of range.
    pub fn validate(&self) -> Result<(), KdfError> {
        if self.parallelism == 0 || self.parallelism > MAX_PARALLELISM {
            return Err(KdfError::InvalidParameters(format!(
                "parallelism must be in 1..={MAX_PARALLELISM}, got {}",
                self.parallelism
            )));
        }
        if u64::from(self.memory_cost) < 8 * u64::from(self.parallelism) {
            return Err(KdfError::InvalidParameters(format!(
                "memory cost must be at least 8 KiB per lane ({} KiB), got {} KiB",
                8 * u64::from(self.parallelism),
                self.memory_cost
            )));
        }
        if self.iterations == 0 {
            return Err(KdfError::InvalidParameters(
                "iterations must be non-zero".to_string(),
            ));
        }
        if !(MIN_SALT_LEN..=MAX_SALT_LEN).contains(&self.salt_len) {
            return Err(KdfError::InvalidParameters(format!(
                "salt length must be in {MIN_SALT_LEN}..={MAX_SALT_LEN}, got {}",
                self.salt_len
            )));
        }
        if self.key_len < MIN_KEY_LEN {
            return Err(KdfError::InvalidParameters(format!(
                "key length must be at least {MIN_KEY_LEN}, got {}",
                self.key_len
            )));
        }
        Ok(())
    }
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self::standard()
    }
}
