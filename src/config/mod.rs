pub mod config_loader;

pub use config_loader::{ConfigLoader, PatcherConfig, DEFAULT_CONFIG_FILE, DEFAULT_TARGET};
