//! Test environment builder for isolated deploy-assets testing.
//!
//! Provides `TestEnv` - a temp project directory with a config file, asset
//! sources, and a `bin/` directory holding a fake `npx`. The binary is told
//! to use that directory through `DEPLOY_ASSETS_SYSTEM_BIN_PATH`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::*;

/// Result of running a deploy-assets CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Directory holding the fake `npx`
    pub fn bin_dir(&self) -> PathBuf {
        self.project_path("bin")
    }

    /// `PATH` handed to compilers
    pub fn system_bin_path(&self) -> String {
        format!("{}:/usr/bin:/bin", self.bin_dir().display())
    }

    pub fn npx_log(&self) -> PathBuf {
        self.project_path("npx.log")
    }

    /// Tools the fake `npx` was invoked with, in order
    pub fn npx_calls(&self) -> Vec<String> {
        fs::read_to_string(self.npx_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run deploy-assets from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_deploy-assets"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("DEPLOY_ASSETS_LOCAL_SOURCE_DIR")
            .env_remove("DEPLOY_ASSETS_DESTINATION")
            .env("DEPLOY_ASSETS_SYSTEM_BIN_PATH", self.system_bin_path())
            .env("FAKE_NPX_LOG", self.npx_log());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute deploy-assets");
        output_to_result(output)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Stored fingerprint from the default hash file, if any
    pub fn stored_hash(&self) -> Option<String> {
        let contents = fs::read_to_string(self.project_path("temp/assets.toml")).ok()?;
        let table: toml::Table = contents.parse().ok()?;
        table
            .get("parameters")?
            .get("assets")?
            .get("hash")?
            .as_str()
            .map(str::to_string)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for `TestEnv`
pub struct TestEnvBuilder {
    config: Option<String>,
    sources: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            config: Some(BASIC_CONFIG.to_string()),
            sources: vec![
                ("vendor.css".to_string(), VENDOR_CSS.to_string()),
                ("app.less".to_string(), APP_LESS.to_string()),
            ],
        }
    }

    /// Sources for every entry of `FULL_CONFIG`
    pub fn full_project(self) -> Self {
        self.with_config(FULL_CONFIG)
            .with_source("theme.scss", THEME_SCSS)
            .with_source("lib.js", LIB_JS)
            .with_source("main.js", MAIN_JS)
            .with_source("entry.js", ENTRY_JS)
            .with_source("debug.js", DEBUG_JS)
    }

    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    pub fn without_config(mut self) -> Self {
        self.config = None;
        self
    }

    /// File under `assets/`
    pub fn with_source(mut self, name: &str, content: &str) -> Self {
        self.sources.retain(|(n, _)| n != name);
        self.sources.push((name.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let bin = project_root.path().join("bin");
        fs::create_dir_all(&bin).expect("Failed to create bin dir");
        write_executable(&bin.join("npx"), FAKE_NPX);

        if let Some(config) = &self.config {
            fs::write(project_root.path().join("deploy-assets.toml"), config)
                .expect("Failed to write config");
        }

        for (name, content) in &self.sources {
            let path = project_root.path().join("assets").join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create source directory");
            }
            fs::write(&path, content).expect("Failed to write source");
        }

        TestEnv { project_root }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn write_executable(path: &Path, content: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, content).expect("Failed to write script");
    let mut perms = fs::metadata(path).expect("stat script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("chmod script");
}

#[cfg(not(unix))]
fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write script");
}
