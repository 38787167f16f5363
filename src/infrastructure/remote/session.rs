//! Session keys, command output and errors

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_SSH_PORT: u16 = 22;

/// Identifies one pooled connection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    /// `host` or `user@host`
    pub host: String,
    pub port: u16,
    /// Private key passed to `ssh -i`
    pub identity: Option<PathBuf>,
}

impl SessionKey {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_SSH_PORT,
            identity: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_identity(mut self, identity: impl Into<PathBuf>) -> Self {
        self.identity = Some(identity.into());
        self
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)?;
        if let Some(identity) = &self.identity {
            write!(f, "#{}", identity.display())?;
        }
        Ok(())
    }
}

/// Result of one remote command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub output: String,
}

pub type RemoteResult<T> = Result<T, RemoteError>;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("SSH can't connect to '{key}': {output}")]
    Connection { key: String, output: String },

    #[error("unable to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("SSH command '{command}' on '{key}' failed (exit {exit_code:?}): {output}")]
    CommandFailed {
        key: String,
        command: String,
        exit_code: Option<i32>,
        output: String,
    },

    #[error("SSH validation error: output of '{command}' doesn't contain '{expected}': {output}")]
    ValidationFailed {
        command: String,
        expected: String,
        output: String,
    },

    #[error("upload of '{local}' to '{remote}' failed: {output}")]
    TransferFailed {
        local: PathBuf,
        remote: String,
        output: String,
    },

    #[error("unable to create control socket directory: {0}")]
    SocketDir(#[source] std::io::Error),
}
