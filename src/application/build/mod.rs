//! Build Module
//!
//! Orchestrates asset builds.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`PipelineConfig`, `LocalOverrides`)
//! - `result` - Result types (`BuildOutcome`, `BuildReport`)
//! - `change_detector` - stored vs. current fingerprint
//! - `dispatch` - walks the manifest and runs one compiler per entry
//! - `use_case` - lock, detect, clear, dispatch, persist (`AssetPipeline`)
//!
//! ## Usage
//!
//! ```ignore
//! use deploy_assets::application::build::{AssetPipeline, PipelineConfig};
//!
//! let pipeline = AssetPipeline::new(config, TomlFingerprintStore::new(), SystemRunner::new());
//! let outcome = pipeline.build_debug(&hash_file, &destination)?;
//! ```

mod change_detector;
mod dispatch;
mod options;
mod result;
mod use_case;

pub use change_detector::ChangeDetector;
pub use options::{LocalOverrides, PipelineConfig};
pub use result::{BuildOutcome, BuildReport};
pub use use_case::AssetPipeline;
