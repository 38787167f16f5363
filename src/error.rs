//! Error types for deploy-assets
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for asset pipeline operations
pub type AssetsResult<T> = Result<T, AssetsError>;

/// Main error type for asset pipeline operations
///
/// Every variant is fatal to the build call that produced it.
#[derive(Error, Debug)]
pub enum AssetsError {
    /// Asset source directory does not exist
    #[error("assets source directory '{path}' doesn't exist")]
    SourceMissing { path: PathBuf },

    /// Manifest entry is malformed or misses a field required by its type
    #[error("invalid manifest entry '{destination}': {message}")]
    Config {
        destination: String,
        message: String,
    },

    /// External compiler exited with a non-zero status
    #[error("error while compiling {asset} for '{destination}'. Command:\n\n{command}\n\nError:\n\n{output}")]
    Compile {
        asset: String,
        destination: String,
        command: String,
        output: String,
    },

    /// Compiler reported success but did not produce the requested map
    #[error("map file '{path}' doesn't exist")]
    MapMissing { path: PathBuf },

    /// Map file exists but is not a JSON source map
    #[error("invalid source map '{path}': {message}")]
    InvalidMap { path: PathBuf, message: String },

    /// Build lock could not be created or acquired
    #[error("unable to lock '{path}': {message}")]
    Lock { path: PathBuf, message: String },

    /// External process could not be started at all
    #[error("unable to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Fingerprint store could not be read or written
    #[error("fingerprint store '{path}': {message}")]
    Store { path: PathBuf, message: String },

    /// IO error on a specific path
    #[error("IO error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssetsError {
    /// Build a `Config` error for a manifest destination
    pub fn config(destination: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            destination: destination.into(),
            message: message.into(),
        }
    }

    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
