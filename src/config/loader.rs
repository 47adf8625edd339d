use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Smallest card that still fits a border, a caption and a placeholder line.
pub const MIN_CARD_WIDTH: u16 = 12;
pub const MIN_CARD_HEIGHT: u16 = 5;

/// Upper bound accepted by the image search endpoint.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pet-gallery/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pet-gallery").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// A missing API key is deliberately not checked here; the API reports it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("api.cat_base_url", &self.api.cat_base_url),
            ("api.dog_base_url", &self.api.dog_base_url),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must not be empty", field),
                });
            }
        }

        let page_size = self.gallery.page_size;
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "gallery.page_size must be between 1 and {}, got {}",
                    MAX_PAGE_SIZE, page_size
                ),
            });
        }

        if self.gallery.card_width < MIN_CARD_WIDTH || self.gallery.card_height < MIN_CARD_HEIGHT
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "gallery card must be at least {}x{}, got {}x{}",
                    MIN_CARD_WIDTH,
                    MIN_CARD_HEIGHT,
                    self.gallery.card_width,
                    self.gallery.card_height
                ),
            });
        }

        Ok(())
    }
}
