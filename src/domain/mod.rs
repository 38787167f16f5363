//! Domain Layer
//!
//! Pure asset-pipeline logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - the asset `Manifest` and its typed tasks
//! - `value_objects/` - `Environment`, `Fingerprint`, `AssetPath`
//! - `services/` - fingerprint folding, source map rewriting
//! - `ports/` - interfaces implemented by infrastructure (runner, store, events)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
