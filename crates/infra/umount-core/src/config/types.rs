use crate::platform::common::DEFAULT_SUDO;
use serde::{Deserialize, Serialize};

/// Fully resolved elevation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the elevation binary
    pub sudo_path: String,

    /// Run commands without elevation
    pub no_sudo: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sudo_path: DEFAULT_SUDO.to_string(),
            no_sudo: false,
        }
    }
}

/// Per-call overrides; absent fields fall back to the defaults snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnmountOptions {
    pub sudo_path: Option<String>,

    pub no_sudo: Option<bool>,
}

impl UnmountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sudo_path(mut self, path: impl Into<String>) -> Self {
        self.sudo_path = Some(path.into());
        self
    }

    pub fn no_sudo(mut self) -> Self {
        self.no_sudo = Some(true);
        self
    }

    pub fn with_no_sudo(mut self, no_sudo: bool) -> Self {
        self.no_sudo = Some(no_sudo);
        self
    }

    /// Merge these options over `defaults`; values set here win.
    pub fn resolve(&self, defaults: &Settings) -> Settings {
        Settings {
            sudo_path: self
                .sudo_path
                .clone()
                .unwrap_or_else(|| defaults.sudo_path.clone()),
            no_sudo: self.no_sudo.unwrap_or(defaults.no_sudo),
        }
    }
}
