use anyhow::Result;
use colored::Colorize;
use umount_core::{UnmountOptions, detect_platform};

pub async fn execute(
    device: &str,
    sudo_path: Option<String>,
    no_sudo: Option<bool>,
    dry_run: bool,
) -> Result<()> {
    let mut options = UnmountOptions::new();
    if let Some(path) = sudo_path {
        options = options.with_sudo_path(path);
    }
    if let Some(no_sudo) = no_sudo {
        options = options.with_no_sudo(no_sudo);
    }

    let unmounter = super::unmounter()?;

    if dry_run {
        match unmounter.unmount_command(device, &options)? {
            Some(command) => println!("{command}"),
            None => println!(
                "{}",
                format!("Nothing to run on {}", detect_platform()).as_str().dimmed()
            ),
        }
        return Ok(());
    }

    let output = unmounter.unmount(device, &options).await?;
    if let Some(stdout) = output.stdout.filter(|s| !s.is_empty()) {
        print!("{stdout}");
    }
    if let Some(stderr) = output.stderr.filter(|s| !s.is_empty()) {
        eprint!("{stderr}");
    }
    println!("{} {}", "Unmounted".green(), device);
    Ok(())
}
