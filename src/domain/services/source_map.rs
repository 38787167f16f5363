//! Source map path rewriting
//!
//! Compilers run on the build host and record build-host paths in their maps.
//! These functions replace them with `file:///` URIs rooted at the developer's
//! checkout (or the build host's real path when no local root is configured),
//! so the maps open in the developer's editor.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::value_objects::normalize_lexically;

const FILE_SCHEME: &str = "file://";

/// Maps build-host source paths to stable URIs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUris {
    source_root: PathBuf,
    real_root: Option<PathBuf>,
    uri_root: String,
}

impl SourceUris {
    /// `uri_root` is the directory the URIs point into
    pub fn new(source_root: impl Into<PathBuf>, uri_root: impl Into<String>) -> Self {
        Self {
            source_root: normalize_lexically(&source_root.into()),
            real_root: None,
            uri_root: uri_root.into(),
        }
    }

    /// Also recognise paths under the canonicalized source root
    pub fn with_real_root(mut self, real_root: impl Into<PathBuf>) -> Self {
        let real_root = real_root.into();
        if real_root != self.source_root {
            self.real_root = Some(real_root);
        }
        self
    }

    pub fn uri_root(&self) -> &str {
        &self.uri_root
    }

    /// URI for a path relative to the source root
    pub fn uri_for_relative(&self, relative: &Path) -> String {
        let root = self.uri_root.replace('\\', "/");
        let root = root.trim_matches('/');
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if root.is_empty() {
            format!("{}/{}", FILE_SCHEME, relative)
        } else {
            format!("{}/{}/{}", FILE_SCHEME, root, relative)
        }
    }

    /// Path relative to the source root, if `path` lies under it
    pub fn relative_of(&self, path: &Path) -> Option<PathBuf> {
        let path = normalize_lexically(path);
        std::iter::once(&self.source_root)
            .chain(self.real_root.as_ref())
            .find_map(|root| path.strip_prefix(root).ok())
            .filter(|rel| !rel.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    /// URI for an absolute build-host path under the source root
    pub fn uri_for(&self, path: &Path) -> Option<String> {
        self.relative_of(path).map(|rel| self.uri_for_relative(&rel))
    }
}

/// Replace every occurrence of each key with its value in one pass
///
/// At each position the longest matching key wins, so a path that is a prefix
/// of another path is never partially rewritten.
pub fn replace_paths(contents: &str, replacements: &[(String, String)]) -> String {
    let mut keys: Vec<&(String, String)> =
        replacements.iter().filter(|(k, _)| !k.is_empty()).collect();
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = String::with_capacity(contents.len());
    let mut rest = contents;
    'outer: while !rest.is_empty() {
        for (key, value) in &keys {
            if let Some(after) = rest.strip_prefix(key.as_str()) {
                out.push_str(value);
                rest = after;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

/// Rewrite the `sources` of a JSON source map
///
/// Relative entries are resolved against `sourceRoot` and `map_dir`. Returns
/// the new map text and how many entries were rewritten. `sourceRoot` is
/// dropped when anything was rewritten, and any relative entry outside the
/// source root is then replaced by its resolved absolute path.
pub fn rewrite_json_sources(
    contents: &str,
    map_dir: &Path,
    uris: &SourceUris,
) -> Result<(String, usize), String> {
    let mut map: Value = serde_json::from_str(contents).map_err(|e| e.to_string())?;
    let object = map
        .as_object_mut()
        .ok_or_else(|| "source map is not a JSON object".to_string())?;

    let source_root = object
        .get("sourceRoot")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(|s| PathBuf::from(s.strip_prefix(FILE_SCHEME).unwrap_or(s)));
    let has_source_root = source_root.is_some();
    let base = match source_root {
        Some(root) => map_dir.join(root),
        None => map_dir.to_path_buf(),
    };

    let mut rewritten = 0;
    let mut unmapped = Vec::new();
    if let Some(Value::Array(sources)) = object.get_mut("sources") {
        for (index, source) in sources.iter_mut().enumerate() {
            let Some(raw) = source.as_str() else {
                continue;
            };
            let path = Path::new(raw.strip_prefix(FILE_SCHEME).unwrap_or(raw));
            if path.is_absolute() {
                if let Some(uri) = uris.uri_for(path) {
                    *source = Value::String(uri);
                    rewritten += 1;
                }
                continue;
            }
            let absolute = base.join(path);
            match uris.uri_for(&absolute) {
                Some(uri) => {
                    *source = Value::String(uri);
                    rewritten += 1;
                }
                None => unmapped.push((index, normalize_lexically(&absolute))),
            }
        }

        // Relative entries left alone were resolved through sourceRoot, so they
        // must be pinned to absolute paths before it goes away.
        if rewritten > 0 && has_source_root {
            for (index, absolute) in unmapped {
                sources[index] = Value::String(absolute.to_string_lossy().into_owned());
            }
        }
    }

    if rewritten > 0 {
        object.remove("sourceRoot");
    }

    let text = serde_json::to_string(&map).map_err(|e| e.to_string())?;
    Ok((text, rewritten))
}
