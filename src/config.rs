//! Configuration module for filepick
//!
//! Manages the browser defaults an embedding application usually wants to
//! persist: the starting root, hidden-file visibility, and name filters.
//! Configuration is stored in the user's config directory.

use crate::provider::FilterSettings;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FilepickConfig {
    /// Root directory to open on startup; the process working directory
    /// when unset
    #[serde(default)]
    pub start_dir: Option<PathBuf>,

    /// Whether hidden (dot-file) entries are listed
    #[serde(default)]
    pub show_hidden: bool,

    /// Wildcard patterns restricting which files are offered (`*.rs`)
    #[serde(default)]
    pub filters: Vec<String>,

    /// Whether filtered-out files disappear entirely instead of being
    /// listed unselectable
    #[serde(default)]
    pub hide_filtered: bool,
}

impl FilepickConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        let filepick_config_dir = config_dir.join("filepick");
        Ok(filepick_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The filter settings this configuration describes
    #[must_use]
    pub fn filter_settings(&self) -> FilterSettings {
        FilterSettings {
            patterns: self.filters.clone(),
            hide_filtered: self.hide_filtered,
        }
    }
}
