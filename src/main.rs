use anyhow::Context;
use clap::Parser;
use pet_gallery::api::AnimalType;
use pet_gallery::config::Config;
use pet_gallery::logging::init_tracing;
use pet_gallery::ui::runtime;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pet-gallery",
    version,
    about = "Browse cat and dog photos in the terminal"
)]
struct Args {
    /// Animal type to show first (overrides gallery.default_animal)
    #[arg(long, value_enum)]
    animal: Option<AnimalType>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "pet_gallery=trace" (RUST_LOG wins)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    let log_path = init_tracing(&config.logging, args.log_level.as_deref())
        .context("failed to open log file")?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        "Starting pet-gallery {}",
        env!("CARGO_PKG_VERSION")
    );

    let animal = args.animal.unwrap_or(config.gallery.default_animal);
    runtime::run(config, animal)
}
