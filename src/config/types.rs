//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::build::{LocalOverrides, PipelineConfig};
use crate::domain::entities::Manifest;

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "deploy-assets.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub local: LocalConfig,
    pub manifest: Manifest,
}

/// Directories and files used by a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Holds `assets.lock`
    pub temp: PathBuf,
    /// Asset source root
    pub source: PathBuf,
    /// Output directory, cleared on every build
    pub destination: PathBuf,
    /// TOML file the fingerprint is stored in
    pub hash_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            temp: PathBuf::from("temp"),
            source: PathBuf::from("assets"),
            destination: PathBuf::from("www/assets"),
            hash_file: PathBuf::from("temp/assets.toml"),
        }
    }
}

/// Machine-local overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_bin_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_source_dir: Option<String>,
}

impl Config {
    /// Pipeline settings with paths resolved against `base_dir`
    pub fn pipeline_config(&self, base_dir: &Path) -> PipelineConfig {
        PipelineConfig::new(
            base_dir.join(&self.paths.temp),
            base_dir.join(&self.paths.source),
            self.manifest.clone(),
        )
        .with_local(LocalOverrides {
            system_bin_path: self.local.system_bin_path.clone(),
            local_source_dir: self.local.local_source_dir.clone(),
        })
    }

    pub fn destination(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.paths.destination)
    }

    pub fn hash_file(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.paths.hash_file)
    }
}
