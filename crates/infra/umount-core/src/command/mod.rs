mod builder;
mod device;

pub use builder::{build_command, elevate, mount_table_command, unmount_command};
pub use device::Device;
