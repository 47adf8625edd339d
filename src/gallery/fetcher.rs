//! Runs gallery requests as tokio tasks and reports outcomes as intents.
//!
//! A task never touches UI state. It sends its outcome to a [`FetchSink`]
//! and, through a scope guard, a final [`GalleryIntent::LoadFinished`] that
//! goes out even if the task unwinds. Superseded requests are not cancelled.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::{AnimalType, FetchError, PetApiClient};
use crate::lazy::{Thumbnail, ThumbnailSize};

use super::intent::GalleryIntent;

/// Work requested by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCommand {
    LoadBreeds {
        animal: AnimalType,
    },
    LoadImages {
        animal: AnimalType,
        breed_id: Option<String>,
    },
    /// Download and decode one card's image after its lazy trigger fired.
    LoadThumbnail {
        image_id: String,
        url: String,
        size: ThumbnailSize,
    },
}

/// Outcome delivered back to the UI loop.
#[derive(Debug, Clone)]
pub enum FetchEvent {
    Gallery(GalleryIntent),
    Thumbnail {
        image_id: String,
        result: Result<Thumbnail, String>,
    },
}

/// Destination for fetch outcomes.
///
/// `deliver` must not block: it is also called from a drop guard.
pub trait FetchSink: Send + Sync + 'static {
    fn deliver(&self, event: FetchEvent);
}

impl FetchSink for tokio::sync::mpsc::UnboundedSender<FetchEvent> {
    fn deliver(&self, event: FetchEvent) {
        if self.send(event).is_err() {
            tracing::trace!("Fetch outcome dropped (receiver gone)");
        }
    }
}

pub fn breeds_error_message(animal: AnimalType, err: &FetchError) -> String {
    format!("Error fetching {} breeds: {}", animal, err)
}

pub fn images_error_message(animal: AnimalType, err: &FetchError) -> String {
    format!("Error fetching {}s: {}", animal, err)
}

pub struct Fetcher<S: FetchSink> {
    client: Arc<PetApiClient>,
    sink: Arc<S>,
    page_size: u32,
}

impl<S: FetchSink> Clone for Fetcher<S> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            sink: Arc::clone(&self.sink),
            page_size: self.page_size,
        }
    }
}

impl<S: FetchSink> Fetcher<S> {
    pub fn new(client: PetApiClient, sink: S, page_size: u32) -> Self {
        Self {
            client: Arc::new(client),
            sink: Arc::new(sink),
            page_size,
        }
    }

    /// Spawn the task for `command`. Must be called inside a tokio runtime.
    pub fn execute(&self, command: FetchCommand) -> JoinHandle<()> {
        match command {
            FetchCommand::LoadBreeds { animal } => self.load_breeds(animal),
            FetchCommand::LoadImages { animal, breed_id } => self.load_images(animal, breed_id),
            FetchCommand::LoadThumbnail {
                image_id,
                url,
                size,
            } => self.load_thumbnail(image_id, url, size),
        }
    }

    pub fn load_breeds(&self, animal: AnimalType) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            let _finished = finish_guard(Arc::clone(&sink));
            let intent = match client.fetch_breeds(animal).await {
                Ok(breeds) => GalleryIntent::BreedsLoaded { animal, breeds },
                Err(err) => {
                    tracing::warn!(animal = %animal, kind = err.kind(), "Breed fetch failed: {}", err);
                    GalleryIntent::BreedsFailed {
                        animal,
                        message: breeds_error_message(animal, &err),
                    }
                }
            };
            sink.deliver(FetchEvent::Gallery(intent));
        })
    }

    pub fn load_images(&self, animal: AnimalType, breed_id: Option<String>) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let sink = Arc::clone(&self.sink);
        let limit = self.page_size;
        tokio::spawn(async move {
            let _finished = finish_guard(Arc::clone(&sink));
            let intent = match client
                .search_images(animal, breed_id.as_deref(), limit)
                .await
            {
                Ok(images) => GalleryIntent::ImagesLoaded { animal, images },
                Err(err) => {
                    tracing::warn!(
                        animal = %animal,
                        breed = ?breed_id,
                        kind = err.kind(),
                        "Image search failed: {}",
                        err
                    );
                    GalleryIntent::ImagesFailed {
                        animal,
                        message: images_error_message(animal, &err),
                    }
                }
            };
            sink.deliver(FetchEvent::Gallery(intent));
        })
    }

    /// Thumbnails do not touch the shared loading flag.
    pub fn load_thumbnail(
        &self,
        image_id: String,
        url: String,
        size: ThumbnailSize,
    ) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            let result = match client.fetch_bytes(&url).await {
                Ok(bytes) => decode_blocking(bytes, size).await,
                Err(err) => Err(err),
            };
            let result = result.map_err(|err| {
                tracing::debug!(image = %image_id, kind = err.kind(), "Thumbnail failed: {}", err);
                err.to_string()
            });
            sink.deliver(FetchEvent::Thumbnail { image_id, result });
        })
    }
}

fn finish_guard<S: FetchSink>(sink: Arc<S>) -> scopeguard::ScopeGuard<Arc<S>, impl FnOnce(Arc<S>)> {
    scopeguard::guard(sink, |sink| {
        sink.deliver(FetchEvent::Gallery(GalleryIntent::LoadFinished));
    })
}

async fn decode_blocking(bytes: Vec<u8>, size: ThumbnailSize) -> Result<Thumbnail, FetchError> {
    tokio::task::spawn_blocking(move || Thumbnail::decode(&bytes, size))
        .await
        .map_err(|err| FetchError::Image(format!("decoder task failed: {}", err)))?
}
