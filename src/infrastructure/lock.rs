//! Build lock
//!
//! Serializes concurrent builds sharing a temp directory with an advisory
//! exclusive lock on `<temp>/assets.lock`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{AssetsError, AssetsResult};

/// Lock file name inside the temp directory
pub const LOCK_FILE_NAME: &str = "assets.lock";

/// Lock location for one temp directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLock {
    path: PathBuf,
}

impl BuildLock {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<temp_dir>/assets.lock`
    pub fn in_dir(temp_dir: &Path) -> Self {
        Self::new(temp_dir.join(LOCK_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until the lock is held
    ///
    /// Creates the file and its parent directory as needed. The file is left
    /// in place after release.
    pub fn acquire(&self) -> AssetsResult<BuildLockGuard> {
        let path = self.path.as_path();
        let lock_error = |message: String| AssetsError::Lock {
            path: path.to_path_buf(),
            message,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| lock_error(format!("cannot create directory: {}", e)))?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| lock_error(format!("cannot open lock file: {}", e)))?;

        if let Err(err) = file.try_lock_exclusive() {
            if err.raw_os_error() != fs2::lock_contended_error().raw_os_error() {
                return Err(lock_error(err.to_string()));
            }
            tracing::info!(path = %path.display(), "waiting for build lock");
            file.lock_exclusive()
                .map_err(|e| lock_error(e.to_string()))?;
        }

        let canonical = path.canonicalize().map_err(|e| AssetsError::io(path, e))?;
        tracing::debug!(path = %canonical.display(), "build lock acquired");

        Ok(BuildLockGuard {
            file,
            path: canonical,
        })
    }
}

/// Held build lock; released on drop
#[derive(Debug)]
pub struct BuildLockGuard {
    file: File,
    path: PathBuf,
}

impl BuildLockGuard {
    /// Canonical path of the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for BuildLockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
        tracing::debug!(path = %self.path.display(), "build lock released");
    }
}
