//! Terminal cat/dog image gallery backed by TheCatAPI / TheDogAPI.
//!
//! - `api` - HTTP client and wire types
//! - `config` - TOML configuration and API key resolution
//! - `gallery` - breed/image data flow (reducer + async fetcher)
//! - `lazy` - viewport-proximity lazy image loading
//! - `ui` - ratatui front end

pub mod api;
pub mod config;
pub mod gallery;
pub mod lazy;
pub mod logging;
pub mod ui;
