use std::fmt;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    /// Any other Unix-like target, keyed by its `std::env::consts::OS` name
    Other(String),
}

impl Platform {
    /// Classify the host operating system.
    ///
    /// The identifier is queried on every call; nothing is cached.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    pub fn from_os_name(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOS,
            "linux" => Self::Linux,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }

    pub fn is_macos(&self) -> bool {
        matches!(self, Self::MacOS)
    }

    pub fn is_linux(&self) -> bool {
        matches!(self, Self::Linux)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Windows => "windows",
            Self::MacOS => "macos",
            Self::Linux => "linux",
            Self::Other(os) => os,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn detect_platform() -> Platform {
    let platform = Platform::current();
    trace!("Detected platform: {}", platform);
    platform
}

pub fn is_windows() -> bool {
    Platform::current().is_windows()
}

pub fn is_macos() -> bool {
    Platform::current().is_macos()
}

pub fn is_linux() -> bool {
    Platform::current().is_linux()
}
