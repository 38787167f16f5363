//! Manifest dispatch
//!
//! Walks the manifest in order and hands each entry to its compiler. The
//! first failure stops the walk.

use crate::domain::entities::{AssetSpec, AssetTask, Manifest};
use crate::domain::ports::{BuildEvent, BuildEventSink};
use crate::domain::value_objects::Environment;
use crate::error::AssetsResult;
use crate::infrastructure::compilers::{get_compiler, CompileContext};

use super::result::BuildReport;

pub(super) fn dispatch_manifest(
    manifest: &Manifest,
    environment: Environment,
    ctx: &CompileContext<'_>,
    events: &dyn BuildEventSink,
) -> AssetsResult<BuildReport> {
    let detailed = events.wants_detailed_events();
    let mut report = BuildReport::new();

    for (index, entry) in manifest.entries().iter().enumerate() {
        let destination = entry.destination.as_str();

        let task = match &entry.spec {
            AssetSpec::Copy => AssetTask::Copy,
            AssetSpec::Record(record) => {
                if !record.applies_to(environment) {
                    if detailed {
                        events.on_event(BuildEvent::EntrySkipped {
                            index,
                            destination: destination.to_string(),
                            reason: format!(
                                "env = {}",
                                record.env.map(|e| e.as_str()).unwrap_or_default()
                            ),
                        });
                    }
                    report.skipped.push(destination.to_string());
                    continue;
                }
                record.task(destination)?
            }
        };

        if detailed {
            events.on_event(BuildEvent::EntryStarted {
                index,
                destination: destination.to_string(),
                asset_type: task.asset_type(),
            });
        }

        let compiler = get_compiler(task.asset_type());
        if let Err(err) = compiler.compile(ctx, destination, &task) {
            events.on_event(BuildEvent::EntryFailed {
                index,
                destination: destination.to_string(),
                error: err.to_string(),
            });
            return Err(err);
        }

        if detailed {
            events.on_event(BuildEvent::EntryBuilt {
                index,
                destination: destination.to_string(),
            });
        }
        report.built.push(destination.to_string());
    }

    Ok(report)
}
