//! Event Sink Implementations
//!
//! Concrete implementations of BuildEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - LogEventSink: `tracing` records for humans

mod json;
mod log;

pub use json::JsonEventSink;
pub use log::LogEventSink;
