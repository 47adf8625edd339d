//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use pet_gallery::api::{AnimalType, PetApiClient};
use pet_gallery::config::{ApiConfig, GalleryConfig};
use pet_gallery::gallery::{FetchCommand, FetchEvent, Fetcher, GalleryIntent};
use pet_gallery::ui::app::App;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub const CAT_BREEDS: &str = r#"[
    {"id": "abys", "name": "Abyssinian", "origin": "Egypt"},
    {"id": "beng", "name": "Bengal", "origin": "United States"}
]"#;

pub const DOG_BREEDS: &str = r#"[
    {"id": 1, "name": "Affenpinscher", "bred_for": "Small rodent hunting"},
    {"id": 2, "name": "Afghan Hound"}
]"#;

pub const IMAGES: &str = r#"[
    {"id": "img1", "url": "https://cdn2.example/img1.jpg", "width": 800, "height": 600,
     "breeds": [{"id": "beng", "name": "Bengal"}]},
    {"id": "img2", "url": "https://cdn2.example/img2.jpg"}
]"#;

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Both hosts point at `base_url`; the dog host is prefixed with `/dog`.
pub fn api_config_for(base_url: &str) -> ApiConfig {
    ApiConfig {
        cat_base_url: base_url.to_string(),
        dog_base_url: format!("{}/dog", base_url),
        api_key: Some("test-key".to_string()),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    }
}

pub type EventRx = mpsc::UnboundedReceiver<FetchEvent>;

pub fn make_fetcher(base_url: &str) -> (Fetcher<mpsc::UnboundedSender<FetchEvent>>, EventRx) {
    let client = PetApiClient::new(&api_config_for(base_url)).expect("client");
    let (tx, rx) = mpsc::unbounded_channel();
    (Fetcher::new(client, tx, 20), rx)
}

/// Drain events for one task: its outcome followed by `LoadFinished`.
pub async fn recv_outcome(rx: &mut EventRx) -> Vec<FetchEvent> {
    let mut events = Vec::new();
    loop {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for fetch event")
            .expect("fetch channel closed");
        let finished = matches!(event, FetchEvent::Gallery(GalleryIntent::LoadFinished));
        events.push(event);
        if finished {
            return events;
        }
    }
}

// -- App helpers --------------------------------------------------------------

/// App wired to a command channel, sized for a 3x2 card viewport.
pub fn make_app(animal: AnimalType) -> (App, mpsc::Receiver<FetchCommand>) {
    let (tx, rx) = mpsc::channel(256);
    let mut app = App::new(&GalleryConfig::default(), animal);
    app.set_command_sender(tx);
    app.on_resize(84, 24);
    (app, rx)
}

pub fn drain_commands(rx: &mut mpsc::Receiver<FetchCommand>) -> Vec<FetchCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}
