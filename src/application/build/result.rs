//! Build Result
//!
//! Result types for build operations.

use crate::domain::value_objects::Fingerprint;

/// Entries handled by one build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Destinations that were built, in manifest order
    pub built: Vec<String>,
    /// Destinations filtered out by their `env`
    pub skipped: Vec<String>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn built_count(&self) -> usize {
        self.built.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// What a build call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Debug build found the stored fingerprint current; nothing was touched
    Skipped { fingerprint: Fingerprint },
    /// Destination was rebuilt and the fingerprint persisted
    Built {
        fingerprint: Fingerprint,
        report: BuildReport,
    },
}

impl BuildOutcome {
    pub fn fingerprint(&self) -> &Fingerprint {
        match self {
            BuildOutcome::Skipped { fingerprint } | BuildOutcome::Built { fingerprint, .. } => {
                fingerprint
            }
        }
    }

    pub fn was_built(&self) -> bool {
        matches!(self, BuildOutcome::Built { .. })
    }
}
