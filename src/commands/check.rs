use std::path::Path;

use anyhow::Result;

use super::load_config;

pub fn cmd_check(config_path: &Path, json: bool) -> Result<()> {
    let loaded = load_config(config_path)?;
    let entries = loaded.config.manifest.len();

    if json {
        let output = serde_json::json!({
            "event": "check",
            "config": config_path.display().to_string(),
            "entries": entries,
            "warnings": loaded.warnings.len(),
            "success": true,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!(
            "✓ {}: {} manifest entr{} valid",
            config_path.display(),
            entries,
            if entries == 1 { "y" } else { "ies" }
        );
        if !loaded.warnings.is_empty() {
            println!("  {} warning(s)", loaded.warnings.len());
        }
    }

    Ok(())
}
