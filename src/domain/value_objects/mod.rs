//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod environment;
mod fingerprint;
pub mod path;

pub use environment::Environment;
pub use fingerprint::Fingerprint;
pub use path::{normalize_lexically, AssetPath, PathError};
