//! FingerprintStore port - persistence of the last build's fingerprint
//!
//! The store is a narrow key/value pair keyed by a config-file path. It is
//! supplied by the caller; the pipeline assumes nothing about the encoding.

use std::path::Path;

use crate::domain::value_objects::Fingerprint;

/// Result type for fingerprint store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Fingerprint store errors
#[derive(Debug)]
pub enum StoreError {
    /// Stored data exists but cannot be understood
    InvalidFormat(String),
    /// I/O error
    Io(std::io::Error),
    /// Error raised by a caller-supplied store
    Other(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidFormat(msg) => write!(f, "invalid fingerprint store: {}", msg),
            StoreError::Io(err) => write!(f, "I/O error: {}", err),
            StoreError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// Reads and writes the stored fingerprint
pub trait FingerprintStore {
    /// Stored fingerprint, or `None` when nothing has been stored yet
    ///
    /// A missing file or missing key is `Ok(None)`, never an error, so the
    /// first build always runs.
    fn read_hash(&self, config_file: &Path) -> StoreResult<Option<Fingerprint>>;

    /// Persist a fingerprint
    fn write_hash(&self, config_file: &Path, fingerprint: &Fingerprint) -> StoreResult<()>;
}

impl<S: FingerprintStore + ?Sized> FingerprintStore for &S {
    fn read_hash(&self, config_file: &Path) -> StoreResult<Option<Fingerprint>> {
        (**self).read_hash(config_file)
    }

    fn write_hash(&self, config_file: &Path, fingerprint: &Fingerprint) -> StoreResult<()> {
        (**self).write_hash(config_file, fingerprint)
    }
}
