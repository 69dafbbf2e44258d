//! Structured logging bootstrap
//!
//! Library code logs through the `log` facade only. Binaries and tests pick
//! the backend; `Logging` wires up `env_logger` for both.
//!
//! Nothing secret may reach a log line. Non-secret identifiers (a lock, an
//! account id) are logged as short SHA-256 fingerprints so that events can be
//! correlated without writing the identifier itself.

use log::{info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Number of hex characters kept from a fingerprint digest.
const FINGERPRINT_HEX_LEN: usize = 12;

/// Logging entry points shared by the lockkey crates
pub struct Logging;

impl Logging {
    /// Initialize logging (call once at application startup)
    ///
    /// Levels come from `RUST_LOG`, e.g. `RUST_LOG=lockkey=debug`.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; repeated initialization is ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Short, stable fingerprint of a non-secret identifier
    ///
    /// Returns `#` followed by the first 12 hex characters of its SHA-256.
    /// Never pass secret material here; a fingerprint of a low-entropy
    /// secret is as good as the secret.
    #[must_use]
    pub fn fingerprint(bytes: &[u8]) -> String {
        let digest = Sha256::digest(bytes);
        let hex_digest = hex::encode(digest);
        format!("#{}", &hex_digest[..FINGERPRINT_HEX_LEN])
    }

    /// Log a failed cryptographic operation
    ///
    /// Only the operation name, the concrete error type and its message are
    /// written. Callers must make sure the error's message carries no payload
    /// bytes.
    pub fn log_crypto_error<E: std::error::Error>(operation: &str, error: &E) {
        warn!("{}", Self::describe_failure(operation, error));
    }

    fn describe_failure<E: std::error::Error>(operation: &str, error: &E) -> String {
        format!(
            "Cryptographic operation failed: {} (error_type: {}): {}",
            operation,
            std::any::type_name::<E>(),
            error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        Logging::init_test();

        let first = Logging::fingerprint(b"user@example.com");
        let again = Logging::fingerprint(b"user@example.com");
        let other = Logging::fingerprint(b"admin@example.com");

        assert_eq!(first, again);
        assert_ne!(first, other);
        assert!(first.starts_with('#'));
        assert_eq!(first.len(), FINGERPRINT_HEX_LEN + 1);
    }

    #[test]
    fn test_fingerprint_does_not_echo_input() {
        let fingerprint = Logging::fingerprint(b"user@example.com");
        assert!(!fingerprint.contains("user"));
    }

    #[test]
    fn test_crypto_error_logging_does_not_panic() {
        Logging::init_test();

        let error = std::io::Error::other("working memory unavailable");
        Logging::log_crypto_error("argon2id", &error);
    }

    #[test]
    fn test_failure_names_concrete_error_type() {
        let error = std::io::Error::other("working memory unavailable");
        let line = Logging::describe_failure("argon2id", &error);

        assert!(line.contains("error_type: std::io::error::Error"));
        assert!(!line.contains("dyn "));
        assert!(line.ends_with(": working memory unavailable"));
    }
}
