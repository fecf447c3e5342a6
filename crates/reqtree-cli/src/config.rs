//! Configuration for the reqtree command line.
//!
//! Settings are read from a TOML file. The path is resolved in order from
//! `--config`, the `REQTREE_CONFIG` environment variable (through clap),
//! and `<config_dir>/reqtree/config.toml`. A missing file means defaults.
//!
//! ```toml
//! [store]
//! settings_file = ".doorstop.yml"
//! item_extension = "yml"
//! include_inactive = false
//!
//! [view]
//! mode = "tree"
//! deferred_documents = false
//!
//! [logging]
//! level = "warn"
//! ```

use std::path::PathBuf;

use reqtree_core::{Error, Result};
use reqtree_store::{StoreOptions, DEFAULT_ITEM_EXTENSION, DEFAULT_SETTINGS_FILE};
use reqtree_tree::ViewMode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ============================================================================
// ConfigManager
// ============================================================================

/// Loading and locating a TOML configuration type.
pub trait ConfigManager: Serialize + DeserializeOwned + Default {
    /// Name used for the config directory and in messages.
    fn project_name() -> &'static str;

    /// `<config_dir>/<project>/config.toml`, if the platform has a config dir.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// The explicit path if given, otherwise the default path.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load the configuration, falling back to defaults when no file exists.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Serialize to pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// ReqtreeConfig
// ============================================================================

/// Top-level reqtree configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReqtreeConfig {
    /// How projects are read from disk.
    pub store: StoreSection,
    /// How documents and items are shown.
    pub view: ViewSection,
    /// Log verbosity.
    pub logging: LoggingSection,
}

impl ConfigManager for ReqtreeConfig {
    fn project_name() -> &'static str {
        "reqtree"
    }
}

/// `[store]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// File marking a directory as a document.
    pub settings_file: String,
    /// Item file extension.
    pub item_extension: String,
    /// Show inactive items too.
    pub include_inactive: bool,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            settings_file: DEFAULT_SETTINGS_FILE.to_string(),
            item_extension: DEFAULT_ITEM_EXTENSION.to_string(),
            include_inactive: false,
        }
    }
}

impl StoreSection {
    /// Options for a [`FileStore`](reqtree_store::FileStore).
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            settings_file: self.settings_file.clone(),
            item_extension: self.item_extension.clone(),
            include_inactive: self.include_inactive,
        }
    }
}

/// `[view]` section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSection {
    /// Default item view.
    pub mode: ViewMode,
    /// Accept documents listed before their parent.
    pub deferred_documents: bool,
}

/// `[logging]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Filter used when neither `-v` nor `RUST_LOG` is given.
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ReqtreeConfig::default();
        assert_eq!(config.store.settings_file, ".doorstop.yml");
        assert_eq!(config.store.item_extension, "yml");
        assert_eq!(config.view.mode, ViewMode::Tree);
        assert!(!config.view.deferred_documents);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_toml_round_trip_sections() {
        let toml_str = ReqtreeConfig::default().to_toml_string().unwrap();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[view]"));
        assert!(toml_str.contains("mode = \"tree\""));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[view]\nmode = \"table\"\n").unwrap();

        let config = ReqtreeConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.view.mode, ViewMode::Table);
        assert_eq!(config.store, StoreSection::default());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = ReqtreeConfig::load(Some("/nonexistent/reqtree/config.toml")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[view]\nmode = \"grid\"\n").unwrap();

        let err = ReqtreeConfig::load(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_store_options() {
        let section = StoreSection {
            include_inactive: true,
            ..StoreSection::default()
        };
        let options = section.store_options();
        assert!(options.include_inactive);
        assert_eq!(options.settings_file, ".doorstop.yml");
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = ReqtreeConfig::resolve_config_path(Some("/etc/reqtree.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/etc/reqtree.toml"));
    }
}
