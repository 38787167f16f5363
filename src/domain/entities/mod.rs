//! Domain Entities
//!
//! - `Manifest` - ordered destination → asset specification mapping

mod manifest;

pub use manifest::{
    AssetRecord, AssetSpec, AssetTask, AssetType, Manifest, ManifestEntry, COPY_MARKER,
};
