//! Change Detector
//!
//! Decides whether a debug build has anything to do.

use std::path::Path;

use crate::domain::entities::Manifest;
use crate::domain::ports::FingerprintStore;
use crate::domain::services::debug_fingerprint;
use crate::domain::value_objects::Fingerprint;
use crate::error::{AssetsError, AssetsResult};
use crate::infrastructure::fs::{content_fingerprint, scan_stamps};

/// Fingerprints one source tree under one manifest
#[derive(Debug, Clone, Copy)]
pub struct ChangeDetector<'a> {
    manifest: &'a Manifest,
    source_root: &'a Path,
    local_source_root: Option<&'a str>,
}

impl<'a> ChangeDetector<'a> {
    pub fn new(
        manifest: &'a Manifest,
        source_root: &'a Path,
        local_source_root: Option<&'a str>,
    ) -> Self {
        Self {
            manifest,
            source_root,
            local_source_root,
        }
    }

    /// Fingerprint over the manifest, local root and file stamps
    ///
    /// `exclude` is a canonical path left out of the scan (the lock file).
    pub fn current_fingerprint(&self, exclude: Option<&Path>) -> AssetsResult<Fingerprint> {
        let stamps = scan_stamps(self.source_root, exclude)?;
        tracing::debug!(files = stamps.len(), "scanned source tree");
        Ok(debug_fingerprint(self.manifest, self.local_source_root, &stamps))
    }

    /// Fingerprint over file contents only
    pub fn content_fingerprint(&self, exclude: Option<&Path>) -> AssetsResult<Fingerprint> {
        content_fingerprint(self.source_root, exclude)
    }

    pub fn read_stored<S: FingerprintStore>(
        store: &S,
        config_file: &Path,
    ) -> AssetsResult<Option<Fingerprint>> {
        store.read_hash(config_file).map_err(|e| AssetsError::Store {
            path: config_file.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn write_stored<S: FingerprintStore>(
        store: &S,
        config_file: &Path,
        fingerprint: &Fingerprint,
    ) -> AssetsResult<()> {
        store
            .write_hash(config_file, fingerprint)
            .map_err(|e| AssetsError::Store {
                path: config_file.to_path_buf(),
                message: e.to_string(),
            })
    }
}
