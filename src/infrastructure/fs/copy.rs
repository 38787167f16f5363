//! Copy, clear and atomic write

use std::fs;
use std::io::Write;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{AssetsError, AssetsResult};

use super::paths::ensure_parent;

/// Copy a file or a directory tree to `target`
///
/// Directories are merged into an existing target; files are overwritten.
pub fn copy_path(source: &Path, target: &Path) -> AssetsResult<()> {
    let metadata = fs::metadata(source).map_err(|e| AssetsError::io(source, e))?;
    if !metadata.is_dir() {
        ensure_parent(target)?;
        fs::copy(source, target).map_err(|e| AssetsError::io(source, e))?;
        return Ok(());
    }

    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            AssetsError::io(path, io)
        })?;
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let dest = target.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(|e| AssetsError::io(&dest, e))?;
        } else {
            fs::copy(entry.path(), &dest).map_err(|e| AssetsError::io(entry.path(), e))?;
        }
    }
    Ok(())
}

/// Remove `dir` with everything in it and create it again, empty
pub fn recreate_dir(dir: &Path) -> AssetsResult<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(AssetsError::io(dir, e)),
    }
    fs::create_dir_all(dir).map_err(|e| AssetsError::io(dir, e))
}

/// Write through a temp file in the same directory, then rename into place
pub fn atomic_write(path: &Path, contents: &[u8]) -> AssetsResult<()> {
    ensure_parent(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| AssetsError::io(dir, e))?;
    temp.write_all(contents)
        .map_err(|e| AssetsError::io(temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| AssetsError::io(path, e.error))?;
    Ok(())
}
