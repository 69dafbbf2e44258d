//! Signatures of derived keys
//!
//! A signature is SHA3-256 over the derived key. It is safe to store next to
//! the lock and is only ever used to check, in constant time, that a later
//! derivation produced the same key.

use std::fmt;
use std::str::FromStr;

use lockkey_common::NotResult;
use lockkey_hashing::{HashAlgorithm, DIGEST_LEN};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::ConstantTimeEq;

use crate::record::DerivedKey;

/// Signature length in bytes
pub const SIGNATURE_LEN: usize = DIGEST_LEN;

/// One-way fingerprint of a derived key
///
/// Equality (both `==` and [`Signature::matches`]) runs in constant time.
#[derive(Clone, Copy)]
pub struct Signature([u8; SIGNATURE_LEN]);

/// Sign a derived key
#[must_use]
pub fn sign(key: &DerivedKey) -> Signature {
    Signature(HashAlgorithm::Sha3_256.digest(key.as_bytes()))
}

impl Signature {
    /// Wrap raw signature bytes, e.g. loaded from storage
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse the hex form produced by `Display`
    ///
    /// Upper- and lowercase digits are both accepted.
    ///
    /// # Errors
    ///
    /// Returns a `hex::FromHexError` for non-hex characters or any length
    /// other than 64 hex digits.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; SIGNATURE_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Raw signature bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// Lowercase hex encoding
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Constant-time check of `candidate` against this signature
    ///
    /// Returns `false` for a candidate of the wrong length. For candidates of
    /// the right length the running time does not depend on where, or
    /// whether, the bytes differ.
    #[must_use]
    pub fn matches(&self, candidate: &[u8]) -> bool {
        if candidate.len() != SIGNATURE_LEN {
            return false;
        }
        self.0[..].ct_eq(candidate).into()
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for Signature {}

impl NotResult for Signature {}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({self})")
    }
}

impl FromStr for Signature {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = std::array::TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(bytes.try_into()?))
    }
}

impl From<[u8; SIGNATURE_LEN]> for Signature {
    fn from(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_hex(&encoded).map_err(serde::de::Error::custom)
    }
}
