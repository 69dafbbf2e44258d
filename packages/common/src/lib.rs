//! Common infrastructure shared by the lockkey crates
//!
//! This crate provides:
//! - Logging bootstrap and log-safe fingerprints of non-secret identifiers
//! - The `NotResult` marker used by `on_result` handlers

pub mod logging;
pub mod traits;

pub use logging::Logging;
pub use traits::NotResult;
