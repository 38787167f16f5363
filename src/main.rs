//! deploy-assets CLI
//!
//! Usage: deploy-assets <COMMAND>
//!
//! Commands:
//!   build        Compile the manifest into the destination directory
//!   check        Load and validate the config file
//!   fingerprint  Print the current debug fingerprint
//!   remote       Run commands on a remote host over SSH

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands, RemoteAction};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Build {
            config,
            production,
            destination,
        } => commands::build::cmd_build(&config, production, destination, cli.json),
        Commands::Check { config } => commands::check::cmd_check(&config, cli.json),
        Commands::Fingerprint { config } => {
            commands::fingerprint::cmd_fingerprint(&config, cli.json)
        }
        Commands::Remote { action } => match action {
            RemoteAction::Exec {
                target,
                expect,
                command,
            } => commands::remote::cmd_exec(&target, &command, expect.as_deref(), cli.json),
            RemoteAction::Upload {
                target,
                file,
                remote_dir,
            } => commands::remote::cmd_upload(&target, &file, &remote_dir, cli.json),
        },
    }
}

/// `RUST_LOG` wins over `-v` when set
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("deploy_assets={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
