//! Pipeline Options
//!
//! Configuration types for asset builds.

use std::path::{Path, PathBuf};

use crate::domain::entities::Manifest;
use crate::infrastructure::compilers::DEFAULT_SYSTEM_BIN_PATH;
use crate::infrastructure::fs::trim_dir;
use crate::infrastructure::lock::BuildLock;

/// Machine-local settings that never change what gets built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalOverrides {
    /// `PATH` for compiler processes
    pub system_bin_path: Option<String>,
    /// Developer checkout that source maps should point at
    pub local_source_dir: Option<String>,
}

impl LocalOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_bin_path(mut self, path: impl Into<String>) -> Self {
        self.system_bin_path = Some(path.into());
        self
    }

    pub fn with_local_source_dir(mut self, dir: impl Into<String>) -> Self {
        self.local_source_dir = Some(dir.into());
        self
    }
}

/// Everything the pipeline needs to run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Holds the lock file
    pub temp_dir: PathBuf,
    /// Asset source root
    pub source_dir: PathBuf,
    pub manifest: Manifest,
    system_bin_path: String,
    local_source_dir: Option<String>,
}

impl PipelineConfig {
    pub fn new(
        temp_dir: impl Into<PathBuf>,
        source_dir: impl AsRef<Path>,
        manifest: Manifest,
    ) -> Self {
        let source_dir = trim_dir(&source_dir.as_ref().to_string_lossy());
        Self {
            temp_dir: temp_dir.into(),
            source_dir: PathBuf::from(source_dir),
            manifest,
            system_bin_path: DEFAULT_SYSTEM_BIN_PATH.to_string(),
            local_source_dir: None,
        }
    }

    /// Apply local overrides; both may be set together
    pub fn with_local(mut self, local: LocalOverrides) -> Self {
        if let Some(path) = local.system_bin_path {
            let path = path.trim_matches(':');
            if !path.is_empty() {
                self.system_bin_path = path.to_string();
            }
        }
        if let Some(dir) = local.local_source_dir {
            let dir = trim_dir(&dir);
            self.local_source_dir = (!dir.is_empty()).then_some(dir);
        }
        self
    }

    pub fn system_bin_path(&self) -> &str {
        &self.system_bin_path
    }

    pub fn local_source_dir(&self) -> Option<&str> {
        self.local_source_dir.as_deref()
    }

    /// The build lock inside `temp_dir`
    pub fn lock(&self) -> BuildLock {
        BuildLock::in_dir(&self.temp_dir)
    }
}
