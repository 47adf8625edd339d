use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Default log location, next to other per-user application data.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pet-gallery")
        .join("pet-gallery.log")
}

/// Filter directive: `RUST_LOG` wins, then the CLI level, then the config.
pub fn build_filter(config: &LoggingConfig, cli_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = cli_level.unwrap_or(&config.level);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Initialize tracing, appending to the configured log file.
///
/// The terminal belongs to the UI, so nothing is written to stdout/stderr
/// once this succeeds. Returns the file in use.
pub fn init_tracing(
    config: &LoggingConfig,
    cli_level: Option<&str>,
) -> std::io::Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(build_filter(config, cli_level))
        .with(file_layer)
        .init();
    Ok(path)
}
