/// Platform-specific constants for unmount and mount-table commands

pub mod linux {
    /// Appended to the quoted device so every partition of a whole disk is
    /// targeted, with failures for never-mounted partitions swallowed
    pub const PARTITION_GLOB_SUFFIX: &str = "?* 2>/dev/null || /bin/true";
}

pub mod macos {
    /// Force-unmounts every volume of a disk; needs no elevation
    pub const DISKUTIL_UNMOUNT_CMD: &str = "/usr/sbin/diskutil unmountDisk force";
}

/// Common constants across platforms
pub mod common {
    /// Generic unmount utility
    pub const UMOUNT_CMD: &str = "umount";

    /// Mount-table listing utility
    pub const MOUNT_CMD: &str = "mount";

    /// Elevation binary used when none is configured
    pub const DEFAULT_SUDO: &str = "sudo";

    /// Shell used to interpret built command strings
    pub const SHELL: &str = "/bin/sh";
}
