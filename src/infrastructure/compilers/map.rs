//! Source map files
//!
//! File-level wrappers around the pure rewriting in
//! `domain::services::source_map`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::services::{replace_paths, rewrite_json_sources, SourceUris};
use crate::error::{AssetsError, AssetsResult};

fn read_map(map_path: &Path) -> AssetsResult<String> {
    if !map_path.is_file() {
        return Err(AssetsError::MapMissing {
            path: map_path.to_path_buf(),
        });
    }
    fs::read_to_string(map_path).map_err(|e| AssetsError::io(map_path, e))
}

/// Rewrite the `sources` of the JSON map at `map_path`
pub fn rewrite_json_map(map_path: &Path, uris: &SourceUris) -> AssetsResult<()> {
    let contents = read_map(map_path)?;
    let map_dir = map_path.parent().unwrap_or(Path::new(""));

    let (rewritten, count) =
        rewrite_json_sources(&contents, map_dir, uris).map_err(|message| {
            AssetsError::InvalidMap {
                path: map_path.to_path_buf(),
                message,
            }
        })?;

    tracing::debug!(map = %map_path.display(), sources = count, "rewrote source map");
    fs::write(map_path, rewritten).map_err(|e| AssetsError::io(map_path, e))
}

/// Replace each absolute source path in the map text with its URI
pub fn rewrite_text_map(
    map_path: &Path,
    sources: &[PathBuf],
    uris: &SourceUris,
) -> AssetsResult<()> {
    let contents = read_map(map_path)?;

    let replacements: Vec<(String, String)> = sources
        .iter()
        .filter_map(|source| {
            uris.uri_for(source)
                .map(|uri| (source.to_string_lossy().into_owned(), uri))
        })
        .collect();

    let rewritten = replace_paths(&contents, &replacements);
    tracing::debug!(
        map = %map_path.display(),
        sources = replacements.len(),
        "rewrote source map"
    );
    fs::write(map_path, rewritten).map_err(|e| AssetsError::io(map_path, e))
}
