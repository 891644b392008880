//! `unmounter` CLI.
//!
//! Unmounts storage devices and reports mount status through the platform's
//! own `umount`, `diskutil` and `mount` tools.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

mod commands;

#[derive(Parser)]
#[command(name = "unmounter")]
#[command(about = "Unmount storage devices and check mount status")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Unmount a device (all of its partitions on Linux)
    Unmount {
        /// Device or mount path, e.g. /dev/sdb or /dev/disk2
        device: String,

        /// Path to the elevation binary
        #[arg(long)]
        sudo_path: Option<String>,

        /// Run without elevation; `--no-sudo=false` overrides a config file
        #[arg(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        no_sudo: Option<bool>,

        /// Print the command instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Check whether a device appears in the mount table
    Status {
        /// Device or mount path
        device: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!("Starting unmounter v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Unmount {
            device,
            sudo_path,
            no_sudo,
            dry_run,
        } => commands::unmount::execute(&device, sudo_path, no_sudo, dry_run).await,
        Commands::Status { device, json } => commands::status::execute(&device, json).await,
        Commands::Config { command } => commands::config::execute(command),
    }
}
