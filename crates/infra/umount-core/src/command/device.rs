use crate::error::{Result, UmountError};
use std::fmt;

/// Opaque identifier of a block device or mount path.
///
/// Only emptiness is checked; the value is otherwise passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Device(String);

impl Device {
    pub fn new(device: impl Into<String>) -> Result<Self> {
        let device = device.into();
        if device.is_empty() {
            return Err(UmountError::MissingDevice);
        }
        Ok(Self(device))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier wrapped in double quotes, ready to splice into a command.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl AsRef<str> for Device {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Device {
    type Error = UmountError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_device_is_missing() {
        assert!(matches!(Device::new(""), Err(UmountError::MissingDevice)));
    }

    #[test]
    fn test_device_is_not_interpreted() {
        let device = Device::try_from(" /dev/disk 2 ").unwrap();
        assert_eq!(device.as_str(), " /dev/disk 2 ");
        assert_eq!(device.quoted(), "\" /dev/disk 2 \"");
    }
}
