//! Input material construction
//!
//! The KDF never sees the raw key. Its password input is
//! HMAC-SHA3-256(key = key, message = lock).

use std::fmt;

use lockkey_hashing::{Digest256, HmacSha3_256, DIGEST_LEN};
use zeroize::Zeroizing;

use crate::error::InitializationError;

/// Length of the input material in bytes
pub const INPUT_MATERIAL_LEN: usize = DIGEST_LEN;

/// Keyed-hash output fed to the KDF in place of the raw key
///
/// Wiped on drop.
pub struct InputMaterial {
    bytes: Zeroizing<Digest256>,
}

impl InputMaterial {
    /// Raw material bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }
}

impl fmt::Debug for InputMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InputMaterial([REDACTED; {INPUT_MATERIAL_LEN} bytes])")
    }
}

/// Build the input material for `lock` and `key`
///
/// # Errors
///
/// Returns `InitializationError::Hash` if the MAC cannot be keyed.
pub fn build_input_material(lock: &[u8], key: &[u8]) -> Result<InputMaterial, InitializationError> {
    let mut mac = HmacSha3_256::new(key)?;
    mac.write(lock);
    Ok(InputMaterial { bytes: mac.sum() })
}
