use crate::api::{AnimalImage, AnimalType, Breed};
use crate::ui::mvi::Intent;

/// User actions and fetch outcomes applied to [`GalleryState`](super::GalleryState).
///
/// Outcomes carry the animal type they were fetched for so that a response
/// arriving after the user switched type can be recognised as stale.
#[derive(Debug, Clone)]
pub enum GalleryIntent {
    /// Switch namespace: clears both data sets and the breed/search selection.
    SelectAnimalType(AnimalType),

    /// `None` means "All Breeds".
    SelectBreed(Option<String>),

    SetSearchTerm(String),

    /// A breed fetch started. Does not clear a prior error.
    BreedsRequested,

    /// An image fetch started. Clears any prior error.
    ImagesRequested,

    BreedsLoaded {
        animal: AnimalType,
        breeds: Vec<Breed>,
    },

    BreedsFailed {
        animal: AnimalType,
        message: String,
    },

    ImagesLoaded {
        animal: AnimalType,
        images: Vec<AnimalImage>,
    },

    ImagesFailed {
        animal: AnimalType,
        message: String,
    },

    /// Sent by every fetch on completion, whatever the outcome.
    LoadFinished,

    /// Breed search found nothing.
    SearchMissed { message: String },
}

impl Intent for GalleryIntent {}
