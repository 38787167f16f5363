//! Fingerprint Value Object
//!
//! An immutable SHA-256 digest summarizing the state of an asset source tree.
//! Debug builds compare fingerprints to decide whether to rebuild; production
//! builds persist one as a record of what was shipped.

use std::fmt;

use sha2::{Digest, Sha256};

/// Fingerprint value object
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Prefix for SHA-256 digests
    pub const PREFIX: &'static str = "sha256:";

    /// Wrap a stored hash string, adding the prefix if it is missing
    pub fn new(raw_hash: &str) -> Self {
        let raw_hash = raw_hash.trim();
        if raw_hash.starts_with(Self::PREFIX) {
            Self(raw_hash.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw_hash))
        }
    }

    /// Compute the fingerprint of a byte slice
    pub fn from_bytes(content: &[u8]) -> Self {
        Self::from_digest(Sha256::digest(content).as_slice())
    }

    /// Finish an incremental hasher into a fingerprint
    pub fn from_hasher(hasher: Sha256) -> Self {
        Self::from_digest(hasher.finalize().as_slice())
    }

    fn from_digest(digest: &[u8]) -> Self {
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            hex.push_str(&format!("{:02x}", byte));
        }
        Self(format!("{}{}", Self::PREFIX, hex))
    }

    /// Full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Just the hex part
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Fingerprint {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&str> for Fingerprint {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
