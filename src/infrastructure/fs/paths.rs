//! Path resolution

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{normalize_lexically, AssetPath};
use crate::error::{AssetsError, AssetsResult};

/// Strip trailing path separators from a configured directory
///
/// A lone `/` is kept so the filesystem root stays addressable.
pub fn trim_dir(dir: &str) -> String {
    let trimmed = dir.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() && !dir.is_empty() {
        dir[..1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Make `path` absolute against the current directory, lexically normalized
pub fn absolutize(path: &Path) -> AssetsResult<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize_lexically(path));
    }
    let cwd = std::env::current_dir().map_err(|e| AssetsError::io(path, e))?;
    Ok(normalize_lexically(&cwd.join(path)))
}

/// Join a manifest path onto a root, rejecting absolute and escaping paths
///
/// `destination` names the manifest entry for error reporting.
pub fn join_relative(root: &Path, relative: &str, destination: &str) -> AssetsResult<PathBuf> {
    let path = AssetPath::new(relative)
        .map_err(|e| AssetsError::config(destination, format!("'{}': {}", relative, e)))?;
    Ok(root.join(path.as_path()))
}

/// Create the parent directory of `path`
pub fn ensure_parent(path: &Path) -> AssetsResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| AssetsError::io(parent, e))
        }
        _ => Ok(()),
    }
}
