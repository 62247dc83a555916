//! Application configuration.
//!
//! This module provides the [`AppConfig`] structure, read from disk at
//! startup and overridden by command-line flags. The museum keeps no session
//! state between runs, so the file is only ever read.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/codemuseum/config.json`
//! - macOS: `~/Library/Application Support/codemuseum/config.json`
//! - Windows: `%APPDATA%/codemuseum/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let config = AppConfig::load().with_overrides(None, None, true);
//! assert!(config.skip_entry);
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::TraversalSetting;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
pub const APP_NAME: &str = "codemuseum";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration.
///
/// Every field is optional in the JSON file; missing fields take defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Adjacency policy for previous/next navigation.
    #[serde(default)]
    pub traversal: TraversalSetting,
    /// Start on the map instead of the entry screen.
    #[serde(default)]
    pub skip_entry: bool,
    /// Catalog file to load instead of the built-in collection.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// A missing file silently yields defaults. An unreadable or malformed
    /// file is logged and also yields defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                let missing = err
                    .downcast_ref::<io::Error>()
                    .is_some_and(|e| e.kind() == io::ErrorKind::NotFound);
                if missing {
                    tracing::debug!("no config file, using defaults");
                } else {
                    tracing::warn!("Config load failed, using defaults: {err}");
                }
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }

    /// Parses configuration JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Applies command-line overrides. Flags win over the file.
    #[must_use]
    pub fn with_overrides(
        mut self,
        traversal: Option<TraversalSetting>,
        catalog: Option<PathBuf>,
        skip_entry: bool,
    ) -> Self {
        if let Some(traversal) = traversal {
            self.traversal = traversal;
        }
        if catalog.is_some() {
            self.catalog = catalog;
        }
        self.skip_entry |= skip_entry;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.traversal, TraversalSetting::Auto);
        assert!(!config.skip_entry);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AppConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_json_format() {
        let config = AppConfig::from_json_str(
            r#"{ "traversal": "catalog", "skip_entry": true, "catalog": "/tmp/museum.json" }"#,
        )
        .unwrap();

        assert_eq!(config.traversal, TraversalSetting::Catalog);
        assert!(config.skip_entry);
        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/museum.json")));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(AppConfig::from_json_str(r#"{ "traversal": "sideways" }"#).is_err());
        assert!(AppConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = AppConfig {
            traversal: TraversalSetting::Catalog,
            skip_entry: false,
            catalog: Some(PathBuf::from("from-file.json")),
        };

        let merged = file.clone().with_overrides(
            Some(TraversalSetting::Workflow),
            Some(PathBuf::from("from-cli.json")),
            true,
        );
        assert_eq!(merged.traversal, TraversalSetting::Workflow);
        assert_eq!(merged.catalog, Some(PathBuf::from("from-cli.json")));
        assert!(merged.skip_entry);

        let untouched = file.clone().with_overrides(None, None, false);
        assert_eq!(untouched, file);
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }
}
