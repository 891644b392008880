pub mod loader;
pub mod settings;
mod types;

pub use loader::{LoadedSettings, load_settings};
pub use types::{Settings, UnmountOptions};
