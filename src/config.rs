//! Configuration file handling.
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/pixflip/config.toml` on Linux). A missing file yields the
//! defaults; a malformed file is an error, not a silent fallback.
//! Command-line flags override whatever the file says.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::loader::DEFAULT_ALPHA_THRESHOLD;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub load: LoadSection,
}

/// Settings for image loading and quantization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadSection {
    /// Downscale images wider than this many grid columns. Unset means
    /// "fit the terminal" in interactive mode and "no limit" otherwise.
    pub max_width: Option<u32>,
    /// Alpha values below this render as white (0 disables the mapping).
    pub alpha_threshold: u8,
}

impl Default for LoadSection {
    fn default() -> Self {
        Self {
            max_width: None,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("pixflip").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Writes the config to its file, creating parent directories.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, self.to_toml()?)?;
        Ok(())
    }

    /// The config serialized as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
