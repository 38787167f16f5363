//! Fingerprint folding
//!
//! Pure functions that turn a source-tree snapshot into a [`Fingerprint`].
//! Scanning the tree is the infrastructure layer's job; here the inputs are
//! already collected into ordered maps so the digest is reproducible.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::domain::entities::Manifest;
use crate::domain::value_objects::Fingerprint;

/// Modification stamp of one source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileStamp {
    /// Nanoseconds since the unix epoch (0 if unavailable)
    pub modified_nanos: u128,
    pub len: u64,
}

/// Debug-mode fingerprint over manifest, local source root and file stamps
///
/// `files` is keyed by the path relative to the source root, with `/`
/// separators.
pub fn debug_fingerprint(
    manifest: &Manifest,
    local_source_root: Option<&str>,
    files: &BTreeMap<String, FileStamp>,
) -> Fingerprint {
    let mut hasher = Sha256::new();

    hasher.update(manifest.canonical_json().as_bytes());
    hasher.update([0u8]);
    hasher.update(local_source_root.unwrap_or("").as_bytes());
    hasher.update([0u8]);

    for (path, stamp) in files {
        hasher.update(path.as_bytes());
        hasher.update(format!("\t{}\t{}\n", stamp.modified_nanos, stamp.len).as_bytes());
    }

    Fingerprint::from_hasher(hasher)
}
