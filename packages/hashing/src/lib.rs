//! 256-bit hash primitives used by the lockkey derivation pipeline
//!
//! Two shapes are provided, both following an `init / write / sum` lifecycle:
//!
//! - [`Hasher256`]: an unkeyed streaming hash (BLAKE2b-256 or SHA3-256)
//! - [`HmacSha3_256`]: HMAC over SHA3-256, keyed with a caller secret
//!
//! ```rust
//! use lockkey_hashing::{HashAlgorithm, Hasher256};
//!
//! let mut hasher = Hasher256::new(HashAlgorithm::Blake2b256);
//! hasher.write(b"user@example.com");
//! hasher.write(b"hello, world!");
//! let digest = hasher.sum();
//! assert_eq!(digest.len(), 32);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod hasher;
pub mod mac;

pub use error::{HashError, Result};
pub use hasher::{Digest256, HashAlgorithm, Hasher256, DIGEST_LEN};
pub use mac::HmacSha3_256;
