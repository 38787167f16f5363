use std::path::Path;

use anyhow::{Context, Result};

use deploy_assets::infrastructure::{SessionKey, SessionPool, SystemRunner};

use crate::cli::RemoteTarget;

fn session_key(target: &RemoteTarget) -> SessionKey {
    let key = SessionKey::new(&target.host).with_port(target.port);
    match &target.identity {
        Some(identity) => key.with_identity(identity),
        None => key,
    }
}

pub fn cmd_exec(
    target: &RemoteTarget,
    command: &[String],
    expect: Option<&str>,
    json: bool,
) -> Result<()> {
    let pool = SessionPool::new(SystemRunner::new()).context("failed to prepare SSH sessions")?;
    let key = session_key(target);
    let command = command.join(" ");

    let output = pool.ssh(&key, &command, expect)?;

    if json {
        let event = serde_json::json!({
            "event": "remote_exec",
            "host": key.to_string(),
            "command": command,
            "output": output,
        });
        println!("{}", serde_json::to_string(&event)?);
    } else {
        print!("{}", output);
    }

    Ok(())
}

pub fn cmd_upload(target: &RemoteTarget, file: &Path, remote_dir: &str, json: bool) -> Result<()> {
    if !file.is_file() {
        anyhow::bail!("'{}' is not a file", file.display());
    }

    let pool = SessionPool::new(SystemRunner::new()).context("failed to prepare SSH sessions")?;
    let key = session_key(target);

    let remote_path = pool.upload(&key, file, remote_dir)?;

    if json {
        let event = serde_json::json!({
            "event": "remote_upload",
            "host": key.to_string(),
            "local": file.display().to_string(),
            "remote": remote_path,
        });
        println!("{}", serde_json::to_string(&event)?);
    } else {
        println!("✓ Uploaded {} to {}:{}", file.display(), target.host, remote_path);
    }

    Ok(())
}
