//! Memory-hard key derivation
//!
//! - `config`: cost parameters and their supported ranges
//! - `backend`: the `MemoryHardKdf` seam and the Argon2id implementation
//! - `engine`: binds the two and produces a `DerivedKey`

pub mod backend;
pub mod config;
pub mod engine;

pub use backend::{Argon2idKdf, MemoryHardKdf};
pub use config::KdfConfig;
pub use engine::KeyDerivationEngine;
