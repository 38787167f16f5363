//! Log Event Sink
//!
//! Turns build events into `tracing` records.

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Event sink that logs through `tracing`
///
/// Per-entry progress is logged at debug level so a default `info` filter
/// shows one line per build.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventSink;

impl BuildEventSink for LogEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Started {
                environment,
                source,
                destination,
                entry_count,
            } => tracing::info!(
                %environment,
                source = %source.display(),
                destination = %destination.display(),
                entries = entry_count,
                "building assets"
            ),
            BuildEvent::UpToDate { fingerprint } => {
                tracing::info!(%fingerprint, "assets are up to date")
            }
            BuildEvent::DestinationCleared { destination } => {
                tracing::debug!(destination = %destination.display(), "cleared destination")
            }
            BuildEvent::EntryStarted {
                index,
                destination,
                asset_type,
            } => tracing::debug!(index, %destination, %asset_type, "building entry"),
            BuildEvent::EntryBuilt { index, destination } => {
                tracing::debug!(index, %destination, "built entry")
            }
            BuildEvent::EntrySkipped {
                index,
                destination,
                reason,
            } => tracing::debug!(index, %destination, %reason, "skipped entry"),
            BuildEvent::EntryFailed {
                index,
                destination,
                error,
            } => tracing::error!(index, %destination, %error, "entry failed"),
            BuildEvent::Completed {
                built_count,
                skipped_count,
                fingerprint,
            } => tracing::info!(
                built = built_count,
                skipped = skipped_count,
                %fingerprint,
                "assets built"
            ),
        }
    }
}
