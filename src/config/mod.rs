//! Configuration module for deploy-assets
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPLOY_ASSETS_*)
//! 3. Config file (deploy-assets.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! Relative paths in the file are resolved against the file's directory.

mod loader;
mod types;

pub use loader::{
    load_with_warnings, with_env_overrides, with_overrides_from, ConfigLoadError, ConfigWarning,
    ENV_DESTINATION, ENV_LOCAL_SOURCE_DIR, ENV_SYSTEM_BIN_PATH,
};
pub use types::{Config, LocalConfig, PathsConfig, DEFAULT_CONFIG_FILE};
