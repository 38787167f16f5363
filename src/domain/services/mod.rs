//! Domain Services
//!
//! Stateless business logic:
//! - `fingerprint` - folds a source-tree snapshot into a fingerprint
//! - `source_map` - rewrites build-host paths in generated maps

pub mod fingerprint;
pub mod source_map;

pub use fingerprint::{debug_fingerprint, FileStamp};
pub use source_map::{replace_paths, rewrite_json_sources, SourceUris};
