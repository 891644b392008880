//! Configuration commands.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;
use umount_core::load_settings;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged settings
    Show {
        /// Path to use as local directory (defaults to current dir)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub fn execute(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show { path } => cmd_show(path),
    }
}

fn cmd_show(path: Option<PathBuf>) -> Result<()> {
    let dir = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };
    let loaded = load_settings(&dir)
        .with_context(|| format!("Failed to load settings for {}", dir.display()))?;

    eprintln!("local:  {}", loaded.paths.local.display());
    if let Some(global) = &loaded.paths.global {
        eprintln!("global: {}", global.display());
    }
    println!("{}", serde_json::to_string_pretty(&loaded.settings)?);
    Ok(())
}
