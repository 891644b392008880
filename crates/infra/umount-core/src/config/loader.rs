//! Settings loader with two-layer merge and env overrides.
//!
//! Precedence (lowest to highest):
//! 1. Default values
//! 2. Global config (`<config_dir>/umount/umount.json`)
//! 3. Local config (`./umount.json`)
//! 4. Environment variables (`UMOUNT_SUDO_PATH`, `UMOUNT_NO_SUDO`)

use super::types::Settings;
use crate::error::{Result, UmountError};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filename for both the local and global config.
pub const CONFIG_FILE: &str = "umount.json";

/// Directory name under `config_dir` for the global config.
pub const GLOBAL_DIR: &str = "umount";

pub const ENV_SUDO_PATH: &str = "UMOUNT_SUDO_PATH";
pub const ENV_NO_SUDO: &str = "UMOUNT_NO_SUDO";

#[derive(Debug, Clone)]
pub struct SettingsPaths {
    pub local: PathBuf,
    /// `None` when the platform has no config directory
    pub global: Option<PathBuf>,
}

#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub paths: SettingsPaths,
}

pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(GLOBAL_DIR).join(CONFIG_FILE))
}

pub fn local_config_path(local_dir: &Path) -> PathBuf {
    local_dir.join(CONFIG_FILE)
}

/// Load settings from the global and local files plus the process environment.
pub fn load_settings(local_dir: &Path) -> Result<LoadedSettings> {
    let paths = SettingsPaths {
        local: local_config_path(local_dir),
        global: global_config_path(),
    };
    let settings = load_from(&paths, |name| std::env::var(name).ok())?;
    Ok(LoadedSettings { settings, paths })
}

/// Load settings from explicit paths, reading overrides through `env`.
pub fn load_from<E>(paths: &SettingsPaths, env: E) -> Result<Settings>
where
    E: Fn(&str) -> Option<String>,
{
    let global_v = match &paths.global {
        Some(path) => read_json_object_or_empty(path)?,
        None => Value::Object(serde_json::Map::new()),
    };
    let local_v = read_json_object_or_empty(&paths.local)?;

    let merged = merge_patch(global_v, local_v);
    let mut settings: Settings = serde_json::from_value(merged)?;

    apply_env_overrides(&mut settings, env);
    debug!(
        "Loaded settings: sudo_path={} no_sudo={}",
        settings.sudo_path, settings.no_sudo
    );
    Ok(settings)
}

fn apply_env_overrides<E>(settings: &mut Settings, env: E)
where
    E: Fn(&str) -> Option<String>,
{
    let trimmed = |name: &str| {
        env(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(v) = trimmed(ENV_SUDO_PATH) {
        settings.sudo_path = v;
    }
    if let Some(v) = trimmed(ENV_NO_SUDO) {
        settings.no_sudo = v.eq_ignore_ascii_case("true") || v == "1";
    }
}

fn read_json_object_or_empty(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let raw = std::fs::read_to_string(path)?;
    let v: Value = serde_json::from_str(&raw).map_err(|e| UmountError::ConfigInvalid {
        message: format!("invalid JSON in {}: {e}", path.display()),
    })?;

    match v {
        Value::Object(_) => Ok(v),
        _ => Err(UmountError::ConfigInvalid {
            message: format!("config root must be a JSON object: {}", path.display()),
        }),
    }
}

/// RFC 7396 merge patch: objects merge recursively, `null` deletes, anything
/// else replaces.
fn merge_patch(target: Value, patch: Value) -> Value {
    match (target, patch) {
        (Value::Object(mut target_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                if patch_value.is_null() {
                    target_map.remove(&key);
                    continue;
                }
                let existing = target_map.remove(&key).unwrap_or(Value::Null);
                target_map.insert(key, merge_patch(existing, patch_value));
            }
            Value::Object(target_map)
        }
        (_, patch) => patch,
    }
}
