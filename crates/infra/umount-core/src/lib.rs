//! Unmount storage devices and check mount status through OS-native commands.
//!
//! Every operation is a single child-process call (`umount`, `diskutil` or
//! `mount`), optionally prefixed with a sudo-like elevation binary.
//!
//! # Example
//! ```no_run
//! # async fn run() -> umount_core::Result<()> {
//! use umount_core::{UnmountOptions, is_mounted, unmount};
//!
//! if is_mounted("/dev/sdb").await? {
//!     unmount("/dev/sdb", &UnmountOptions::new().no_sudo()).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod exec;
pub mod ops;
pub mod platform;

pub use command::Device;
pub use config::{Settings, UnmountOptions, load_settings, settings};
pub use error::{Result, UmountError};
pub use exec::{CommandOutput, CommandRunner, ShellRunner};
pub use ops::{UnmountOutput, Unmounter, is_mounted, unmount};
pub use platform::{Platform, detect_platform};
