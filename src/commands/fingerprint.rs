use std::path::Path;

use anyhow::Result;

use deploy_assets::application::AssetPipeline;
use deploy_assets::infrastructure::{SystemRunner, TomlFingerprintStore};

use super::load_config;

/// Print the fingerprint a debug build would compare against the store
pub fn cmd_fingerprint(config_path: &Path, json: bool) -> Result<()> {
    let loaded = load_config(config_path)?;
    let pipeline = AssetPipeline::new(
        loaded.config.pipeline_config(&loaded.base_dir),
        TomlFingerprintStore::new(),
        SystemRunner::new(),
    );
    let fingerprint = pipeline.current_fingerprint()?;

    if json {
        let output = serde_json::json!({
            "event": "fingerprint",
            "fingerprint": fingerprint.as_str(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", fingerprint);
    }

    Ok(())
}
