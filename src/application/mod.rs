//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AssetPipeline` - Orchestrates the build flow (lock, detect changes, clear, dispatch, persist)

pub mod build;

pub use build::{AssetPipeline, BuildOutcome, BuildReport, ChangeDetector, LocalOverrides, PipelineConfig};
