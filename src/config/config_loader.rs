use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PatchError, Result};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = ".create-order-patch.toml";

/// File rewritten when no other target is configured
pub const DEFAULT_TARGET: &str = "services/database_service.py";

/// Settings for a patch run
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PatcherConfig {
    /// File to rewrite, relative to the working directory
    pub target: PathBuf,

    /// Fail when the pattern is not found
    pub strict: bool,

    /// Print the diff instead of writing
    #[serde(skip)]
    pub dry_run: bool,
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            strict: false,
            dry_run: false,
        }
    }
}

/// The configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
    required: bool,
}

impl ConfigLoader {
    /// Loader for the optional default config file
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            required: false,
        }
    }

    /// Loader for an explicit config file, which must exist
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            required: true,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the configuration, falling back to defaults when an optional
    /// file is absent
    pub fn load(&self) -> Result<PatcherConfig> {
        if !self.config_path.exists() {
            if self.required {
                return Err(PatchError::config_error(
                    "config file does not exist",
                    &self.config_path,
                ));
            }
            debug!(
                "No config file at {}, using defaults",
                self.config_path.display()
            );
            return Ok(PatcherConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| PatchError::io_error(e, &self.config_path))?;

        let config: PatcherConfig = toml::from_str(&content)
            .map_err(|e| PatchError::config_error(e.to_string(), &self.config_path))?;

        debug!(
            "Loaded config from {}: target={}, strict={}",
            self.config_path.display(),
            config.target.display(),
            config.strict
        );
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = PatcherConfig::default();
        assert_eq!(config.target, PathBuf::from("services/database_service.py"));
        assert!(!config.strict);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_missing_optional_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader {
            config_path: dir.path().join(DEFAULT_CONFIG_FILE),
            required: false,
        };
        assert_eq!(loader.load().unwrap(), PatcherConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::with_path(dir.path().join("patch.toml"));
        let err = loader.load().unwrap_err();
        assert!(matches!(err, PatchError::Config { .. }));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patch.toml");
        fs::write(&path, "strict = true\n").unwrap();

        let config = ConfigLoader::with_path(&path).load().unwrap();
        assert!(config.strict);
        assert_eq!(config.target, PathBuf::from(DEFAULT_TARGET));
    }

    #[test]
    fn test_target_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patch.toml");
        fs::write(&path, "target = \"backend/services/database_service.py\"\n").unwrap();

        let config = ConfigLoader::with_path(&path).load().unwrap();
        assert_eq!(
            config.target,
            PathBuf::from("backend/services/database_service.py")
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patch.toml");
        fs::write(&path, "dry_run = true\n").unwrap();

        let err = ConfigLoader::with_path(&path).load().unwrap_err();
        assert!(matches!(err, PatchError::Config { .. }));
    }
}
