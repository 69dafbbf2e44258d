//! Key derivation engine
//!
//! Binds a [`KdfConfig`] to a [`MemoryHardKdf`] backend and turns input
//! material plus salt into a [`DerivedKey`].

use zeroize::Zeroizing;

use super::backend::{Argon2idKdf, MemoryHardKdf};
use super::config::KdfConfig;
use crate::error::KdfError;
use crate::material::InputMaterial;
use crate::record::DerivedKey;
use crate::salt::Salt;

/// Memory-hard derivation with a fixed configuration
#[derive(Debug, Clone)]
pub struct KeyDerivationEngine<K = Argon2idKdf> {
    config: KdfConfig,
    kdf: K,
}

impl KeyDerivationEngine<Argon2idKdf> {
    /// Argon2id engine with the standard configuration
    #[must_use]
    pub fn standard() -> Self {
        Self::new(KdfConfig::standard(), Argon2idKdf::new())
    }
}

impl Default for KeyDerivationEngine<Argon2idKdf> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<K: MemoryHardKdf> KeyDerivationEngine<K> {
    /// Create an engine from a configuration and a backend
    #[must_use]
    pub fn new(config: KdfConfig, kdf: K) -> Self {
        Self { config, kdf }
    }

    /// Derive `config.key_len` bytes from `material` under `salt`
    ///
    /// The output buffer is wiped if the backend fails part-way.
    ///
    /// # Errors
    ///
    /// Returns `KdfError::InvalidParameters` if the configuration is out of
    /// range or `salt` is not `config.salt_len` bytes long, and passes any
    /// backend error through unchanged.
    pub fn derive(&self, material: &InputMaterial, salt: &Salt) -> Result<DerivedKey, KdfError> {
        self.config.validate()?;
        if salt.len() != self.config.salt_len {
            return Err(KdfError::InvalidParameters(format!(
                "salt is {} bytes, configuration expects {}",
                salt.len(),
                self.config.salt_len
            )));
        }

        let mut out = Zeroizing::new(vec![0u8; self.config.key_len]);
        self.kdf.derive_into(
            &self.config,
            material.as_bytes(),
            salt.as_bytes(),
            out.as_mut_slice(),
        )?;

        Ok(DerivedKey::from_zeroizing(out))
    }

    /// The configuration every derivation uses
    #[must_use]
    pub fn config(&self) -> &KdfConfig {
        &self.config
    }

    /// The backend
    #[must_use]
    pub fn kdf(&self) -> &K {
        &self.kdf
    }

    pub(crate) fn with_config(self, config: KdfConfig) -> Self {
        Self { config, ..self }
    }

    pub(crate) fn with_kdf<K2: MemoryHardKdf>(self, kdf: K2) -> KeyDerivationEngine<K2> {
        KeyDerivationEngine {
            config: self.config,
            kdf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::build_input_material;
    use crate::salt::build_salt;

    fn engine() -> KeyDerivationEngine {
        KeyDerivationEngine::new(KdfConfig::low_cost(), Argon2idKdf::new())
    }

    #[test]
    fn test_produces_configured_length() {
        let salt = build_salt(b"lock", b"key", 16).unwrap();
        let material = build_input_material(b"lock", b"key").unwrap();

        let key = engine().derive(&material, &salt).unwrap();
        assert_eq!(key.len(), 32);

        let longer = engine()
            .with_config(KdfConfig {
                key_len: 64,
                ..KdfConfig::low_cost()
            })
            .derive(&material, &salt)
            .unwrap();
        assert_eq!(longer.len(), 64);
    }

    #[test]
    fn test_rejects_salt_of_wrong_length() {
        let salt = build_salt(b"lock", b"key", 24).unwrap();
        let material = build_input_material(b"lock", b"key").unwrap();

        let result = engine().derive(&material, &salt);
        assert!(matches!(result, Err(KdfError::InvalidParameters(_))));
    }

    #[test]
    fn test_rejects_invalid_config_before_calling_backend() {
        let salt = build_salt(b"lock", b"key", 16).unwrap();
        let material = build_input_material(b"lock", b"key").unwrap();

        let result = engine()
            .with_config(KdfConfig {
                iterations: 0,
                ..KdfConfig::low_cost()
            })
            .derive(&material, &salt);
        assert!(matches!(result, Err(KdfError::InvalidParameters(_))));
    }
}
