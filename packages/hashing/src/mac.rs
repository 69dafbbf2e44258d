//! HMAC over SHA3-256
//!
//! The tag produced here is secret-dependent, so `sum` hands it back in a
//! buffer that is wiped when dropped.

use hmac::{Hmac, Mac};
use sha3::Sha3_256;
use zeroize::Zeroizing;

use crate::hasher::{Digest256, DIGEST_LEN};
use crate::{HashError, Result};

type HmacSha3 = Hmac<Sha3_256>;

/// Keyed SHA3-256 hash with an `init(key) / write / sum` lifecycle
#[derive(Clone)]
pub struct HmacSha3_256 {
    mac: HmacSha3,
}

impl HmacSha3_256 {
    /// Initialize the MAC with `key`
    ///
    /// HMAC accepts keys of any length; keys longer than the SHA3-256 block
    /// are hashed first, as the construction prescribes.
    ///
    /// # Errors
    ///
    /// Returns `HashError::MacInitialization` if the MAC rejects the key.
    pub fn new(key: &[u8]) -> Result<Self> {
        let mac = <HmacSha3 as Mac>::new_from_slice(key)
            .map_err(|e| HashError::MacInitialization(format!("HMAC-SHA3-256 key error: {e}")))?;
        Ok(Self { mac })
    }

    /// Absorb message bytes
    pub fn write(&mut self, data: &[u8]) {
        self.mac.update(data);
    }

    /// Finalize and return the tag
    #[must_use]
    pub fn sum(self) -> Zeroizing<Digest256> {
        let tag = self.mac.finalize().into_bytes();
        let mut out = Zeroizing::new([0u8; DIGEST_LEN]);
        out.copy_from_slice(&tag);
        out
    }
}
