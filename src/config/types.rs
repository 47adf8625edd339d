use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::api::AnimalType;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote pet-image API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host serving the cat namespace.
    #[serde(default = "default_cat_base_url")]
    pub cat_base_url: String,
    /// Host serving the dog namespace.
    #[serde(default = "default_dog_base_url")]
    pub dog_base_url: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Literal API key; takes precedence over `api_key_env` when non-empty.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Gallery behaviour and grid geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Animal type shown at start-up.
    #[serde(default)]
    pub default_animal: AnimalType,
    /// Images requested per search (default: 20).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Rows beyond the viewport edge that still trigger a lazy image.
    #[serde(default = "default_lazy_margin_rows")]
    pub lazy_margin_rows: u16,
    /// Card width in terminal columns, borders included.
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    /// Card height in terminal rows, borders included.
    #[serde(default = "default_card_height")]
    pub card_height: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to the platform data dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_cat_base_url() -> String {
    "https://api.thecatapi.com".to_string()
}

fn default_dog_base_url() -> String {
    "https://api.thedogapi.com".to_string()
}

fn default_api_key_env() -> String {
    "PET_GALLERY_API_KEY".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> u32 {
    20
}

fn default_lazy_margin_rows() -> u16 {
    4
}

fn default_card_width() -> u16 {
    28
}

fn default_card_height() -> u16 {
    12
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ApiConfig {
    /// Base URL for the given animal namespace, without trailing slash.
    pub fn base_url(&self, animal: AnimalType) -> &str {
        let url = match animal {
            AnimalType::Cat => &self.cat_base_url,
            AnimalType::Dog => &self.dog_base_url,
        };
        url.trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cat_base_url: default_cat_base_url(),
            dog_base_url: default_dog_base_url(),
            api_key_env: default_api_key_env(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_animal: AnimalType::default(),
            page_size: default_page_size(),
            lazy_margin_rows: default_lazy_margin_rows(),
            card_width: default_card_width(),
            card_height: default_card_height(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
