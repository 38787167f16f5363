//! Repository Implementations
//!
//! Concrete implementations of the fingerprint store port.

mod fingerprint;

pub use fingerprint::{FnFingerprintStore, MemoryFingerprintStore, TomlFingerprintStore};
