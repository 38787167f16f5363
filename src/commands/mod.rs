//! Command handlers behind the CLI

pub mod build;
pub mod check;
pub mod fingerprint;
pub mod remote;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use deploy_assets::config::{self, Config, ConfigWarning};

/// Config file contents plus the directory its relative paths resolve against
pub struct LoadedConfig {
    pub config: Config,
    pub base_dir: PathBuf,
    pub warnings: Vec<ConfigWarning>,
}

pub fn load_config(path: &Path) -> Result<LoadedConfig> {
    let (config, warnings) = config::load_with_warnings(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    print_config_warnings(path, &warnings);

    let base_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(LoadedConfig {
        config: config::with_env_overrides(config),
        base_dir,
        warnings,
    })
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
