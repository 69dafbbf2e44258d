//! Streaming 256-bit hashes
//!
//! Input is absorbed through successive `write` calls. Two writes of `a` and
//! `b` produce the same digest as one write of `a || b`; callers that need
//! domain separation between fields must add it themselves.

use blake2::Blake2b;
use digest::consts::U32;
use digest::Digest;
use sha3::Sha3_256;

/// Output length of every hash in this module, in bytes.
pub const DIGEST_LEN: usize = 32;

/// A finished 256-bit digest
pub type Digest256 = [u8; DIGEST_LEN];

/// BLAKE2b parameterized for a 32-byte output (not a truncated BLAKE2b-512)
type Blake2b256 = Blake2b<U32>;

/// Supported 256-bit hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// BLAKE2b with a 32-byte digest length parameter
    Blake2b256,
    /// SHA3-256 (FIPS 202)
    Sha3_256,
}

/// Internal hasher state for the supported algorithms
#[derive(Clone)]
enum HasherState {
    Blake2b256(Blake2b256),
    Sha3_256(Sha3_256),
}

/// Incremental 256-bit hasher with an `init / write / sum` lifecycle
#[derive(Clone)]
pub struct Hasher256 {
    state: HasherState,
}

impl Hasher256 {
    /// Initialize a hasher for `algorithm`
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        let state = match algorithm {
            HashAlgorithm::Blake2b256 => HasherState::Blake2b256(Blake2b256::new()),
            HashAlgorithm::Sha3_256 => HasherState::Sha3_256(Sha3_256::new()),
        };

        Self { state }
    }

    /// Absorb `data` into the running state
    pub fn write(&mut self, data: &[u8]) {
        match &mut self.state {
            HasherState::Blake2b256(hasher) => hasher.update(data),
            HasherState::Sha3_256(hasher) => hasher.update(data),
        }
    }

    /// Finalize and return the digest
    #[must_use]
    pub fn sum(self) -> Digest256 {
        match self.state {
            HasherState::Blake2b256(hasher) => hasher.finalize().into(),
            HasherState::Sha3_256(hasher) => hasher.finalize().into(),
        }
    }
}

impl HashAlgorithm {
    /// One-shot digest of `data`
    #[must_use]
    pub fn digest(self, data: &[u8]) -> Digest256 {
        let mut hasher = Hasher256::new(self);
        hasher.write(data);
        hasher.sum()
    }
}
