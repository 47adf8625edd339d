mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader, API_KEY_HEADER};
pub use credentials::{CredentialStatus, SecureString};
pub use loader::{ConfigError, MAX_PAGE_SIZE, MIN_CARD_HEIGHT, MIN_CARD_WIDTH};
pub use types::{ApiConfig, Config, GalleryConfig, LoggingConfig};
