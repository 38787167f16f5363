//! Source tree scanning
//!
//! Walks the source root in a stable order and collects either modification
//! stamps (debug fingerprint) or file contents (production fingerprint).

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::domain::services::FileStamp;
use crate::domain::value_objects::Fingerprint;
use crate::error::{AssetsError, AssetsResult};

/// Modification stamps of every regular file under `root`
///
/// Keys are `/`-separated paths relative to `root`. `exclude` is compared by
/// canonical path, so a lock file living inside the tree is left out.
pub fn scan_stamps(
    root: &Path,
    exclude: Option<&Path>,
) -> AssetsResult<BTreeMap<String, FileStamp>> {
    let mut stamps = BTreeMap::new();
    for (relative, path) in walk_files(root, exclude)? {
        let metadata = fs::metadata(&path).map_err(|e| AssetsError::io(&path, e))?;
        let modified_nanos = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        stamps.insert(
            relative,
            FileStamp {
                modified_nanos,
                len: metadata.len(),
            },
        );
    }
    Ok(stamps)
}

/// SHA-256 over the contents of every file under `root`, in path order
pub fn content_fingerprint(root: &Path, exclude: Option<&Path>) -> AssetsResult<Fingerprint> {
    let mut hasher = Sha256::new();
    for (_, path) in walk_files(root, exclude)? {
        let mut file = fs::File::open(&path).map_err(|e| AssetsError::io(&path, e))?;
        io::copy(&mut file, &mut hasher).map_err(|e| AssetsError::io(&path, e))?;
    }
    Ok(Fingerprint::from_hasher(hasher))
}

fn walk_files(root: &Path, exclude: Option<&Path>) -> AssetsResult<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .min_depth(1);

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
            AssetsError::io(path, source)
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        if is_excluded(entry.path(), exclude) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        files.push((relative, entry.into_path()));
    }

    // Order by full relative path, not per-directory
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

fn is_excluded(path: &Path, exclude: Option<&Path>) -> bool {
    let Some(exclude) = exclude else {
        return false;
    };
    if path.file_name() != exclude.file_name() {
        return false;
    }
    path.canonicalize()
        .map(|canonical| canonical == exclude)
        .unwrap_or(false)
}
