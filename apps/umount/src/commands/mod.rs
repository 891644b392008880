pub mod config;
pub mod status;
pub mod unmount;

use anyhow::{Context, Result};
use umount_core::{Unmounter, load_settings};

/// Build an `Unmounter` whose defaults come from the config files and
/// environment of the current directory.
pub fn unmounter() -> Result<Unmounter> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_settings(&cwd).context("Failed to load unmounter settings")?;
    Ok(Unmounter::new().with_defaults(loaded.settings))
}
