mod constants;
mod detector;

pub use constants::*;
pub use detector::{Platform, detect_platform, is_linux, is_macos, is_windows};
