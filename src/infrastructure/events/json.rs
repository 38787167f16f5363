//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let json = match event {
            BuildEvent::Started {
                environment,
                source,
                destination,
                entry_count,
            } => serde_json::json!({
                "event": "start",
                "command": "build",
                "environment": environment.as_str(),
                "source": source.display().to_string(),
                "destination": destination.display().to_string(),
                "entry_count": entry_count,
            }),

            BuildEvent::UpToDate { fingerprint } => serde_json::json!({
                "event": "up_to_date",
                "command": "build",
                "fingerprint": fingerprint.as_str(),
            }),

            BuildEvent::DestinationCleared { destination } => serde_json::json!({
                "event": "destination_cleared",
                "command": "build",
                "destination": destination.display().to_string(),
            }),

            BuildEvent::EntryStarted {
                index,
                destination,
                asset_type,
            } => serde_json::json!({
                "event": "item_start",
                "command": "build",
                "index": index,
                "path": destination,
                "type": asset_type.as_str(),
            }),

            BuildEvent::EntryBuilt { index, destination } => serde_json::json!({
                "event": "item_built",
                "command": "build",
                "index": index,
                "path": destination,
            }),

            BuildEvent::EntrySkipped {
                index,
                destination,
                reason,
            } => serde_json::json!({
                "event": "item_skipped",
                "command": "build",
                "index": index,
                "path": destination,
                "reason": reason,
            }),

            BuildEvent::EntryFailed {
                index,
                destination,
                error,
            } => serde_json::json!({
                "event": "item_error",
                "command": "build",
                "index": index,
                "path": destination,
                "error": error,
            }),

            BuildEvent::Completed {
                built_count,
                skipped_count,
                fingerprint,
            } => serde_json::json!({
                "event": "complete",
                "command": "build",
                "status": "success",
                "built": built_count,
                "skipped": skipped_count,
                "fingerprint": fingerprint.as_str(),
            }),
        };

        self.write_event(json);
    }
}
