//! deploy-assets - incremental asset compilation and pooled remote execution
//!
//! Builds a declarative asset manifest (copy, LESS, Sass, UglifyJS, Rollup)
//! into an output directory, skipping debug builds whose inputs have not
//! changed, and runs deployment commands over reused SSH sessions.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{AssetPipeline, BuildOutcome, BuildReport, LocalOverrides, PipelineConfig};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{AssetRecord, AssetSpec, AssetType, Manifest};
pub use domain::value_objects::{Environment, Fingerprint};
pub use error::{AssetsError, AssetsResult};
pub use infrastructure::{SessionKey, SessionPool, SystemRunner, TomlFingerprintStore};
