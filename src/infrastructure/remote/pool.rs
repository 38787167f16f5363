//! SSH session pool

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use crate::domain::ports::{shell_quote, CommandRunner, Invocation, ProcessOutput};

use super::session::{RemoteError, RemoteOutput, RemoteResult, SessionKey};

/// Keyed cache of OpenSSH control-master connections
///
/// The first command for a key starts a persistent master on a control
/// socket inside a pool-owned temp directory; later commands reuse it.
/// Sessions are closed by [`close`](Self::close), [`close_all`](Self::close_all)
/// or when the pool is dropped.
pub struct SessionPool<R: CommandRunner> {
    runner: R,
    socket_dir: TempDir,
    sessions: Mutex<HashMap<SessionKey, PathBuf>>,
    next_socket: Mutex<usize>,
}

impl<R: CommandRunner> SessionPool<R> {
    pub fn new(runner: R) -> RemoteResult<Self> {
        let socket_dir = tempfile::Builder::new()
            .prefix("ssh-pool-")
            .tempdir()
            .map_err(RemoteError::SocketDir)?;
        Ok(Self {
            runner,
            socket_dir,
            sessions: Mutex::new(HashMap::new()),
            next_socket: Mutex::new(0),
        })
    }

    /// Number of open sessions
    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `command` on the remote host and capture its output
    pub fn exec(&self, key: &SessionKey, command: &str) -> RemoteResult<RemoteOutput> {
        let socket = self.connect(key)?;
        let invocation = Invocation::new("ssh")
            .arg("-S")
            .arg(socket.display().to_string())
            .arg("-p")
            .arg(key.port.to_string())
            .arg(&key.host)
            .arg(command);

        let output = self.run(&invocation)?;
        tracing::debug!(%key, command, status = ?output.exit_code, "remote command finished");

        Ok(RemoteOutput {
            success: output.success,
            exit_code: output.exit_code,
            output: output.output,
        })
    }

    /// Run `command`, failing on a non-zero exit or when the output does not
    /// contain `validate`
    ///
    /// Returns the command output.
    pub fn ssh(&self, key: &SessionKey, command: &str, validate: Option<&str>) -> RemoteResult<String> {
        let result = self.exec(key, command)?;

        if !result.success {
            tracing::warn!(%key, command, output = %result.output, "SSH command failed");
            return Err(RemoteError::CommandFailed {
                key: key.to_string(),
                command: command.to_string(),
                exit_code: result.exit_code,
                output: result.output,
            });
        }

        if let Some(expected) = validate {
            if !result.output.contains(expected) {
                return Err(RemoteError::ValidationFailed {
                    command: command.to_string(),
                    expected: expected.to_string(),
                    output: result.output,
                });
            }
        }

        Ok(result.output)
    }

    /// Copy `local_file` into `remote_dir`, creating the directory first
    ///
    /// A relative `remote_dir` is resolved against the remote working
    /// directory. Returns the absolute remote file path.
    pub fn upload(&self, key: &SessionKey, local_file: &Path, remote_dir: &str) -> RemoteResult<String> {
        let remote_dir = remote_dir.trim_end_matches('/');
        let remote_dir = if remote_dir.is_empty() { "." } else { remote_dir };

        self.ssh(key, &format!("mkdir -p {}", shell_quote(remote_dir)), None)?;

        let absolute_dir = if remote_dir.starts_with('/') {
            remote_dir.to_string()
        } else {
            let home = self.ssh(key, "pwd", None)?;
            format!("{}/{}", home.trim().trim_end_matches('/'), remote_dir)
        };

        let file_name = local_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let remote_file = format!("{}/{}", absolute_dir, file_name);

        let socket = self.connect(key)?;
        let invocation = Invocation::new("scp")
            .arg("-o")
            .arg(format!("ControlPath={}", socket.display()))
            .arg("-P")
            .arg(key.port.to_string())
            .arg(local_file.display().to_string())
            .arg(format!("{}:{}", key.host, remote_file));

        let output = self.run(&invocation)?;
        if !output.success {
            return Err(RemoteError::TransferFailed {
                local: local_file.to_path_buf(),
                remote: remote_file,
                output: output.output,
            });
        }

        tracing::info!(%key, local = %local_file.display(), remote = %remote_file, "uploaded");
        Ok(remote_file)
    }

    /// Close the session for `key`, if open
    pub fn close(&self, key: &SessionKey) -> RemoteResult<()> {
        let socket = self.sessions().remove(key);
        match socket {
            Some(socket) => self.exit_master(key, &socket),
            None => Ok(()),
        }
    }

    /// Close every open session; failures are logged and skipped
    pub fn close_all(&self) {
        let sessions: Vec<(SessionKey, PathBuf)> = self.sessions().drain().collect();
        for (key, socket) in sessions {
            if let Err(err) = self.exit_master(&key, &socket) {
                tracing::warn!(%key, error = %err, "failed to close SSH session");
            }
        }
    }

    fn connect(&self, key: &SessionKey) -> RemoteResult<PathBuf> {
        let mut sessions = self.sessions();
        if let Some(socket) = sessions.get(key) {
            return Ok(socket.clone());
        }

        let socket = self.next_socket_path();
        let mut invocation = Invocation::new("ssh")
            .args(["-o", "ControlMaster=auto"])
            .arg("-o")
            .arg(format!("ControlPath={}", socket.display()))
            .args(["-o", "ControlPersist=yes", "-o", "BatchMode=yes"])
            .arg("-p")
            .arg(key.port.to_string());
        if let Some(identity) = &key.identity {
            invocation = invocation.arg("-i").arg(identity.display().to_string());
        }
        let invocation = invocation.arg(&key.host).arg("true");

        let output = self.run(&invocation)?;
        if !output.success {
            return Err(RemoteError::Connection {
                key: key.to_string(),
                output: output.output.trim().to_string(),
            });
        }

        tracing::debug!(%key, socket = %socket.display(), "SSH session opened");
        sessions.insert(key.clone(), socket.clone());
        Ok(socket)
    }

    fn exit_master(&self, key: &SessionKey, socket: &Path) -> RemoteResult<()> {
        let invocation = Invocation::new("ssh")
            .arg("-S")
            .arg(socket.display().to_string())
            .args(["-O", "exit"])
            .arg(&key.host);
        let output = self.run(&invocation)?;
        if !output.success {
            tracing::debug!(%key, output = %output.output.trim(), "control master already gone");
        }
        tracing::debug!(%key, "SSH session closed");
        Ok(())
    }

    fn run(&self, invocation: &Invocation) -> RemoteResult<ProcessOutput> {
        self.runner
            .run(invocation)
            .map_err(|source| RemoteError::Spawn {
                command: invocation.command_line(),
                source,
            })
    }

    fn next_socket_path(&self) -> PathBuf {
        let mut next = self.next_socket.lock().unwrap_or_else(|e| e.into_inner());
        let path = self.socket_dir.path().join(format!("s{}", *next));
        *next += 1;
        path
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<SessionKey, PathBuf>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<R: CommandRunner> Drop for SessionPool<R> {
    fn drop(&mut self) {
        self.close_all();
    }
}
