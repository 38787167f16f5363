//! Environment value object - selects the build flavour
//!
//! - `Debug` builds emit source maps and may be skipped when nothing changed
//! - `Production` builds never emit maps and always rebuild

use serde::{Deserialize, Serialize};

/// Target environment of a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Developer build with source maps
    #[default]
    Debug,
    /// Release build
    Production,
}

impl Environment {
    /// Returns true for debug builds
    pub fn is_debug(&self) -> bool {
        matches!(self, Environment::Debug)
    }

    /// Whether compilers should be asked for source maps
    pub fn wants_source_map(&self) -> bool {
        self.is_debug()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Debug => "debug",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Environment::Debug),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "unknown environment '{}', expected 'debug' or 'production'",
                other
            )),
        }
    }
}
