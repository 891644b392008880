//! Integration tests for the unmounter CLI.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the caller's config files and environment.
fn unmounter_cmd(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("unmounter");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("UMOUNT_SUDO_PATH")
        .env_remove("UMOUNT_NO_SUDO")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();
    unmounter_cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sudo_path\": \"sudo\""))
        .stdout(predicate::str::contains("\"no_sudo\": false"));
}

#[test]
fn test_config_show_env_override() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("umount.json"),
        r#"{"sudo_path": "/usr/bin/doas"}"#,
    )
    .unwrap();

    unmounter_cmd(&home)
        .env("UMOUNT_NO_SUDO", "true")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/usr/bin/doas"))
        .stdout(predicate::str::contains("\"no_sudo\": true"));
}

#[test]
fn test_config_show_rejects_bad_json() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("umount.json"), "[]").unwrap();

    unmounter_cmd(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
#[cfg(target_os = "linux")]
fn test_dry_run_no_sudo() {
    let home = TempDir::new().unwrap();
    unmounter_cmd(&home)
        .args(["unmount", "/dev/sdz", "--no-sudo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "umount \"/dev/sdz\"?* 2>/dev/null || /bin/true\n",
        ));
}

#[test]
#[cfg(target_os = "linux")]
fn test_dry_run_uses_local_config() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("umount.json"),
        r#"{"sudo_path": "/usr/bin/doas"}"#,
    )
    .unwrap();

    unmounter_cmd(&home)
        .args(["unmount", "/dev/sdz", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "/usr/bin/doas umount \"/dev/sdz\"",
        ));

    // Flags beat the config file
    unmounter_cmd(&home)
        .args(["unmount", "/dev/sdz", "--dry-run", "--sudo-path", "/usr/bin/sudo"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "/usr/bin/sudo umount \"/dev/sdz\"",
        ));
}

#[test]
#[cfg(target_os = "macos")]
fn test_dry_run_macos_ignores_sudo() {
    let home = TempDir::new().unwrap();
    unmounter_cmd(&home)
        .args(["unmount", "/dev/disk2", "--dry-run", "--sudo-path", "/usr/bin/sudo"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "/usr/sbin/diskutil unmountDisk force \"/dev/disk2\"\n",
        ));
}

#[test]
fn test_empty_device_is_rejected() {
    let home = TempDir::new().unwrap();
    unmounter_cmd(&home)
        .args(["unmount", "", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing device"));

    unmounter_cmd(&home)
        .args(["status", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing device"));
}

#[test]
#[cfg(target_os = "linux")]
fn test_blank_sudo_path_falls_back_to_sudo() {
    let home = TempDir::new().unwrap();
    unmounter_cmd(&home)
        .args(["unmount", "/dev/sdz", "--dry-run", "--sudo-path", " "])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sudo umount \"/dev/sdz\""));
}

#[test]
#[cfg(target_os = "linux")]
fn test_no_sudo_flag_overrides_config() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("umount.json"), r#"{"no_sudo": true}"#).unwrap();

    unmounter_cmd(&home)
        .args(["unmount", "/dev/sdz", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("umount \"/dev/sdz\""));

    unmounter_cmd(&home)
        .args(["unmount", "/dev/sdz", "--dry-run", "--no-sudo=false"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sudo umount \"/dev/sdz\""));
}
