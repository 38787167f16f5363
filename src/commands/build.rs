use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use deploy_assets::application::{AssetPipeline, BuildOutcome};
use deploy_assets::domain::ports::BuildEventSink;
use deploy_assets::infrastructure::{
    JsonEventSink, LogEventSink, SystemRunner, TomlFingerprintStore,
};

use super::load_config;

pub fn cmd_build(
    config_path: &Path,
    production: bool,
    destination: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let loaded = load_config(config_path)?;
    let destination =
        destination.unwrap_or_else(|| loaded.config.destination(&loaded.base_dir));
    let hash_file = loaded.config.hash_file(&loaded.base_dir);

    let events: Arc<dyn BuildEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(LogEventSink)
    };
    let pipeline = AssetPipeline::new(
        loaded.config.pipeline_config(&loaded.base_dir),
        TomlFingerprintStore::new(),
        SystemRunner::new(),
    )
    .with_events(events);

    let outcome = if production {
        pipeline.build_production(&hash_file, &destination)?
    } else {
        pipeline.build_debug(&hash_file, &destination)?
    };

    if !json {
        match &outcome {
            BuildOutcome::Skipped { fingerprint } => {
                println!("✓ Assets up to date ({})", fingerprint);
            }
            BuildOutcome::Built {
                fingerprint,
                report,
            } => {
                println!(
                    "✓ Built {} asset(s) into {} ({} skipped)",
                    report.built_count(),
                    destination.display(),
                    report.skipped_count()
                );
                println!("  fingerprint: {}", fingerprint);
            }
        }
    }

    Ok(())
}
