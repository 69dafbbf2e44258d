//! Derived keys and the records handed back to callers

use std::fmt;

use lockkey_common::NotResult;
use zeroize::Zeroizing;

use crate::deriver::Deriver;
use crate::signature::Signature;

/// Key material produced by the memory-hard KDF
///
/// Not `Clone`, wiped on drop, and redacted in `Debug`. The only way to see
/// the bytes is to ask for them explicitly.
pub struct DerivedKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl DerivedKey {
    /// Take ownership of raw key bytes
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::from_zeroizing(Zeroizing::new(bytes))
    }

    pub(crate) fn from_zeroizing(bytes: Zeroizing<Vec<u8>>) -> Self {
        Self { bytes }
    }

    /// Borrow the key bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the key is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex encoding, wiped when dropped
    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.as_bytes()))
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey([REDACTED; {} bytes])", self.len())
    }
}

/// A derived key together with its storable signature
///
/// The core keeps no copy of either half; dropping the record wipes the key.
#[derive(Debug)]
pub struct DerivedKeyRecord {
    key: DerivedKey,
    sig: Signature,
}

impl NotResult for DerivedKeyRecord {}

impl DerivedKeyRecord {
    /// Derive a record for `lock` and `key` with the standard Argon2id
    /// configuration
    ///
    /// Equivalent to `Deriver::new().derive(lock, key)`.
    ///
    /// # Errors
    ///
    /// Returns a `DerivationError` naming the stage that failed.
    pub fn new(lock: &[u8], key: &[u8]) -> crate::Result<Self> {
        Deriver::new().derive(lock, key)
    }

    pub(crate) fn from_parts(key: DerivedKey, sig: Signature) -> Self {
        Self { key, sig }
    }

    /// The derived key
    #[must_use]
    pub fn key(&self) -> &DerivedKey {
        &self.key
    }

    /// The signature of the derived key
    #[must_use]
    pub fn sig(&self) -> &Signature {
        &self.sig
    }

    /// Constant-time check of a candidate signature against this record
    #[must_use]
    pub fn matches(&self, candidate: &[u8]) -> bool {
        self.sig.matches(candidate)
    }

    /// Split into key and signature
    #[must_use]
    pub fn into_parts(self) -> (DerivedKey, Signature) {
        (self.key, self.sig)
    }
}
