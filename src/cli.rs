use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use deploy_assets::config::DEFAULT_CONFIG_FILE;
use deploy_assets::infrastructure::remote::DEFAULT_SSH_PORT;

/// deploy-assets - incremental asset compilation and pooled remote execution
#[derive(Parser, Debug)]
#[command(name = "deploy-assets")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit build events as NDJSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile the manifest into the destination directory
    Build {
        /// Path to the config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Production build: no source maps, always rebuilds
        #[arg(long)]
        production: bool,

        /// Output directory (overrides the config file)
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },

    /// Load and validate the config file
    Check {
        /// Path to the config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Print the current debug fingerprint without building
    Fingerprint {
        /// Path to the config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Run commands on a remote host over a pooled SSH session
    Remote {
        #[command(subcommand)]
        action: RemoteAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum RemoteAction {
    /// Execute a command remotely
    Exec {
        #[command(flatten)]
        target: RemoteTarget,

        /// Fail unless the output contains this text
        #[arg(long)]
        expect: Option<String>,

        /// Command and arguments to run
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Copy a local file into a remote directory
    Upload {
        #[command(flatten)]
        target: RemoteTarget,

        /// Local file
        file: PathBuf,

        /// Remote directory (created if missing)
        remote_dir: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RemoteTarget {
    /// Host, optionally as user@host
    #[arg(long)]
    pub host: String,

    /// SSH port
    #[arg(short, long, default_value_t = DEFAULT_SSH_PORT)]
    pub port: u16,

    /// Private key file
    #[arg(short, long)]
    pub identity: Option<PathBuf>,
}
