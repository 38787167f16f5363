//! System process runner
//!
//! Implements the `CommandRunner` port with `std::process::Command`.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandRunner, Invocation, ProcessOutput};

/// Spawns real processes and waits for them
///
/// stdin is closed; stdout and stderr are captured and returned together.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        tracing::debug!(command = %invocation, "spawning");

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = invocation.working_dir() {
            command.current_dir(dir);
        }

        let output = command.output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        tracing::debug!(
            program = %invocation.program,
            status = ?output.status.code(),
            "process finished"
        );

        Ok(ProcessOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            output: combined,
        })
    }
}
