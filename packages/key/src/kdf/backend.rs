//! Memory-hard KDF backends
//!
//! [`MemoryHardKdf`] is the seam between the derivation engine and the
//! password-hashing primitive. Production code uses [`Argon2idKdf`]; tests
//! substitute a recording fake to observe exactly which parameters reach the
//! primitive.

use argon2::{Algorithm, Argon2, Block, Params, Version};
use zeroize::Zeroizing;

use super::config::KdfConfig;
use crate::error::KdfError;

/// A memory-hard password-hashing function
///
/// Implementations must be deterministic: the same configuration, password
/// and salt always fill `out` with the same bytes. They must also be safe to
/// call from several threads at once.
pub trait MemoryHardKdf: Send + Sync {
    /// Configure the primitive from `config`, hash `password` under `salt`
    /// and write `out.len()` bytes of key material into `out`
    ///
    /// # Errors
    ///
    /// Returns `KdfError::InvalidParameters` if the primitive rejects the
    /// parameters, `KdfError::WorkingMemory` if its working memory cannot be
    /// allocated, and `KdfError::Backend` for any other failure.
    fn derive_into(
        &self,
        config: &KdfConfig,
        password: &[u8],
        salt: &[u8],
        out: &mut [u8],
    ) -> Result<(), KdfError>;
}

/// Argon2id, version 0x13
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2idKdf;

impl Argon2idKdf {
    /// Create the Argon2id backend
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MemoryHardKdf for Argon2idKdf {
    fn derive_into(
        &self,
        config: &KdfConfig,
        password: &[u8],
        salt: &[u8],
        out: &mut [u8],
    ) -> Result<(), KdfError> {
        let params = Params::new(
            config.memory_cost,
            config.iterations,
            config.parallelism,
            Some(out.len()),
        )
        .map_err(|e| KdfError::InvalidParameters(format!("Argon2 rejected parameters: {e}")))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        // Working memory is reserved up front so that an allocation failure
        // surfaces as an error instead of an abort, and is scrubbed on drop
        // whichever way this function returns.
        let block_count = argon2.params().block_count();
        let mut blocks: Zeroizing<Vec<Block>> = Zeroizing::new(Vec::new());
        blocks
            .try_reserve_exact(block_count)
            .map_err(|_| KdfError::WorkingMemory {
                blocks: block_count,
            })?;
        blocks.resize(block_count, Block::default());

        argon2
            .hash_password_into_with_memory(password, salt, out, blocks.as_mut_slice())
            .map_err(|e| match e {
                argon2::Error::MemoryTooLittle => KdfError::WorkingMemory {
                    blocks: block_count,
                },
                argon2::Error::SaltTooShort
                | argon2::Error::SaltTooLong
                | argon2::Error::OutputTooShort
                | argon2::Error::OutputTooLong
                | argon2::Error::PwdTooLong => {
                    KdfError::InvalidParameters(format!("Argon2 rejected input sizes: {e}"))
                }
                other => KdfError::Backend(format!("Argon2id derivation failed: {other}")),
            })
    }
}
