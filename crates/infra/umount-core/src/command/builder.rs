use super::device::Device;
use crate::config::Settings;
use crate::platform::common::{DEFAULT_SUDO, MOUNT_CMD, UMOUNT_CMD};
use crate::platform::linux::PARTITION_GLOB_SUFFIX;
use crate::platform::macos::DISKUTIL_UNMOUNT_CMD;
use crate::platform::Platform;

/// Prefix `command` with the elevation binary, falling back to `sudo` when
/// `sudo_path` is blank.
pub fn elevate(command: &str, sudo_path: &str) -> String {
    let sudo = if sudo_path.trim().is_empty() {
        DEFAULT_SUDO
    } else {
        sudo_path
    };
    format!("{sudo} {command}")
}

/// Join `command` and `args` with spaces, elevating unless `settings.no_sudo`.
pub fn build_command(command: &str, args: &[String], settings: &Settings) -> String {
    let result = format!("{command} {}", args.join(" "));
    if settings.no_sudo {
        result
    } else {
        elevate(&result, &settings.sudo_path)
    }
}

/// Shell command that unmounts `device`, or `None` where unmounting is a no-op.
pub fn unmount_command(platform: &Platform, device: &Device, settings: &Settings) -> Option<String> {
    let (base, settings) = match platform {
        Platform::Windows => return None,
        // diskutil needs no elevation and ignores the configured elevator
        Platform::MacOS => (
            DISKUTIL_UNMOUNT_CMD,
            Settings {
                no_sudo: true,
                ..settings.clone()
            },
        ),
        Platform::Linux | Platform::Other(_) => (UMOUNT_CMD, settings.clone()),
    };

    let mut arg = device.quoted();
    if platform.is_linux() {
        arg.push_str(PARTITION_GLOB_SUFFIX);
    }

    Some(build_command(base, &[arg], &settings))
}

/// Shell command listing the mount table. Never elevated and never takes the
/// device; matching happens against its output.
pub fn mount_table_command() -> &'static str {
    MOUNT_CMD
}
