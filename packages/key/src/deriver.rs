//! Derivation pipeline
//!
//! ```text
//! salt      = BLAKE2b-256(lock || key)[..salt_len]
//! material  = HMAC-SHA3-256(key, lock)
//! derived   = Argon2id(material, salt, config)
//! signature = SHA3-256(derived)
//! ```
//!
//! Each step fails fast. A caller gets either a complete record or a single
//! `DerivationError` naming the stage, never a partial result.

use log::debug;
use lockkey_common::Logging;
use tokio::sync::oneshot;
use zeroize::Zeroizing;

use crate::error::{DerivationError, Result, Stage};
use crate::kdf::{Argon2idKdf, KdfConfig, KeyDerivationEngine, MemoryHardKdf};
use crate::key_result::DerivedKeyResult;
use crate::material::build_input_material;
use crate::record::DerivedKeyRecord;
use crate::salt::build_salt;
use crate::signature::sign;

/// Configurable entry point for derivations
///
/// ```rust,no_run
/// use lockkey::{Deriver, KdfConfig};
///
/// # fn main() -> lockkey::Result<()> {
/// let record = Deriver::new()
///     .with_config(KdfConfig::standard())
///     .derive(b"user@example.com", b"hello, world!")?;
///
/// let stored = record.sig().to_string();
/// let candidate = hex::decode(&stored).unwrap_or_default();
/// assert!(record.matches(&candidate));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Deriver<K = Argon2idKdf> {
    engine: KeyDerivationEngine<K>,
}

impl Deriver<Argon2idKdf> {
    /// Argon2id with the standard configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: KeyDerivationEngine::standard(),
        }
    }
}

impl Default for Deriver<Argon2idKdf> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: MemoryHardKdf> Deriver<K> {
    /// Replace the KDF configuration
    #[must_use]
    pub fn with_config(self, config: KdfConfig) -> Self {
        Self {
            engine: self.engine.with_config(config),
        }
    }

    /// Replace the memory-hard KDF backend
    #[must_use]
    pub fn with_kdf<K2: MemoryHardKdf>(self, kdf: K2) -> Deriver<K2> {
        Deriver {
            engine: self.engine.with_kdf(kdf),
        }
    }

    /// The configuration in use
    #[must_use]
    pub fn config(&self) -> &KdfConfig {
        self.engine.config()
    }

    /// Derive a key and its signature from `lock` and `key`
    ///
    /// # Errors
    ///
    /// Returns a `DerivationError` tagged with the first stage that failed.
    pub fn derive(&self, lock: &[u8], key: &[u8]) -> Result<DerivedKeyRecord> {
        let result = self.run(lock, key);
        if let Err(e) = &result {
            Logging::log_crypto_error("derive", e);
        }
        result
    }

    fn run(&self, lock: &[u8], key: &[u8]) -> Result<DerivedKeyRecord> {
        let config = self.engine.config();
        config
            .validate()
            .map_err(DerivationError::at(Stage::Configuration))?;

        debug!(
            "Deriving key for lock {} (memory_cost: {} KiB, iterations: {}, parallelism: {})",
            Logging::fingerprint(lock),
            config.memory_cost,
            config.iterations,
            config.parallelism
        );

        let salt =
            build_salt(lock, key, config.salt_len).map_err(DerivationError::at(Stage::Salt))?;
        debug!("{} stage complete: {}-byte salt", Stage::Salt, salt.len());

        let material =
            build_input_material(lock, key).map_err(DerivationError::at(Stage::InputMaterial))?;
        debug!(
            "{} stage complete: {}-byte material",
            Stage::InputMaterial,
            material.as_bytes().len()
        );

        let derived = self
            .engine
            .derive(&material, &salt)
            .map_err(DerivationError::at(Stage::KeyDerivation))?;
        debug!(
            "{} stage complete: {}-byte key",
            Stage::KeyDerivation,
            derived.len()
        );

        let sig = sign(&derived);
        debug!("Signature {sig}");

        Ok(DerivedKeyRecord::from_parts(derived, sig))
    }
}

impl<K> Deriver<K>
where
    K: MemoryHardKdf + Clone + 'static,
{
    /// Derive on Tokio's blocking pool
    ///
    /// Must be called from within a Tokio runtime. The memory-hard step
    /// cannot be interrupted: dropping the returned future (for example on a
    /// caller-side timeout) discards the result, but the computation runs to
    /// completion and then releases its buffers.
    pub fn derive_async(
        &self,
        lock: impl Into<Vec<u8>>,
        key: impl Into<Vec<u8>>,
    ) -> DerivedKeyResult {
        let deriver = self.clone();
        let lock = lock.into();
        let key = Zeroizing::new(key.into());

        let (tx, rx) = oneshot::channel();

        tokio::task::spawn_blocking(move || {
            let result = deriver.derive(&lock, &key);
            let _ = tx.send(result);
        });

        DerivedKeyResult::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InitializationError, KdfError};

    fn low_cost() -> Deriver {
        Deriver::new().with_config(KdfConfig::low_cost())
    }

    #[test]
    fn test_default_uses_standard_config() {
        assert_eq!(Deriver::new().config(), &KdfConfig::standard());
    }

    #[test]
    fn test_invalid_config_fails_at_configuration_stage() {
        let err = Deriver::new()
            .with_config(KdfConfig {
                parallelism: 0,
                ..KdfConfig::low_cost()
            })
            .derive(b"lock", b"key")
            .unwrap_err();

        assert_eq!(err.stage(), Stage::Configuration);
        assert!(matches!(
            err.initialization_error(),
            InitializationError::Kdf(KdfError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_error_messages_never_echo_inputs() {
        let err = Deriver::new()
            .with_config(KdfConfig {
                salt_len: 64,
                ..KdfConfig::low_cost()
            })
            .derive(b"user@example.com", b"correct horse battery staple")
            .unwrap_err();

        let message = err.to_string();
        assert!(!message.contains("user@example.com"));
        assert!(!message.contains("correct horse"));
    }

    #[test]
    fn test_record_is_complete() {
        let record = low_cost().derive(b"lock", b"key").unwrap();
        assert_eq!(record.key().len(), 32);
        assert_eq!(record.sig(), &sign(record.key()));
        assert!(record.matches(record.sig().as_bytes()));
    }
}
