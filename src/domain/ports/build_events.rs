//! Build Event Port
//!
//! Observable interface for asset builds. Enables log output, JSON event
//! streams for CI, and assertions in tests.

use std::path::PathBuf;

use crate::domain::entities::AssetType;
use crate::domain::value_objects::{Environment, Fingerprint};

/// Event emitted during a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// Lock held, build starting
    Started {
        environment: Environment,
        source: PathBuf,
        destination: PathBuf,
        entry_count: usize,
    },

    /// Debug build found nothing changed
    UpToDate { fingerprint: Fingerprint },

    /// Destination directory was cleared and recreated
    DestinationCleared { destination: PathBuf },

    /// Entry dispatch started
    EntryStarted {
        index: usize,
        destination: String,
        asset_type: AssetType,
    },

    /// Entry finished successfully
    EntryBuilt { index: usize, destination: String },

    /// Entry filtered out by its `env`
    EntrySkipped {
        index: usize,
        destination: String,
        reason: String,
    },

    /// Entry failed; the build aborts after this event
    EntryFailed {
        index: usize,
        destination: String,
        error: String,
    },

    /// Build completed and the fingerprint was persisted
    Completed {
        built_count: usize,
        skipped_count: usize,
        fingerprint: Fingerprint,
    },
}

/// Trait for receiving build events
///
/// Implementations:
/// - `LogEventSink`: `tracing` output
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait BuildEventSink: Send + Sync {
    fn on_event(&self, event: BuildEvent);

    /// Whether this sink wants per-entry events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
