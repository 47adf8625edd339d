use crate::ui::mvi::Reducer;

use super::intent::GalleryIntent;
use super::state::{GalleryState, QueryState};

/// Reducer for the gallery: data sets plus loading/error flags.
///
/// Pure. Fetches are issued by the caller; their outcomes come back here as
/// intents in arrival order, so overlapping requests resolve last-writer-wins.
pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::SelectAnimalType(animal_type) => GalleryState {
                animal_type,
                breeds: Vec::new(),
                images: Vec::new(),
                query: QueryState {
                    selected_breed: None,
                    search_term: String::new(),
                    ..state.query
                },
            },

            GalleryIntent::SelectBreed(selected_breed) => GalleryState {
                query: QueryState {
                    selected_breed,
                    ..state.query
                },
                ..state
            },

            GalleryIntent::SetSearchTerm(search_term) => GalleryState {
                query: QueryState {
                    search_term,
                    ..state.query
                },
                ..state
            },

            GalleryIntent::BreedsRequested => GalleryState {
                query: QueryState {
                    is_loading: true,
                    ..state.query
                },
                ..state
            },

            GalleryIntent::ImagesRequested => GalleryState {
                query: QueryState {
                    is_loading: true,
                    error: None,
                    ..state.query
                },
                ..state
            },

            GalleryIntent::BreedsLoaded { animal, breeds } => {
                if animal != state.animal_type {
                    return state;
                }
                GalleryState { breeds, ..state }
            }

            GalleryIntent::ImagesLoaded { animal, images } => {
                if animal != state.animal_type {
                    return state;
                }
                GalleryState { images, ..state }
            }

            GalleryIntent::BreedsFailed { animal, message }
            | GalleryIntent::ImagesFailed { animal, message } => {
                if animal != state.animal_type {
                    return state;
                }
                with_error(state, message)
            }

            GalleryIntent::LoadFinished => GalleryState {
                query: QueryState {
                    is_loading: false,
                    ..state.query
                },
                ..state
            },

            GalleryIntent::SearchMissed { message } => with_error(state, message),
        }
    }
}

fn with_error(state: GalleryState, message: String) -> GalleryState {
    GalleryState {
        query: QueryState {
            error: Some(message),
            ..state.query
        },
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AnimalImage, AnimalType, Breed};

    fn loaded_cats() -> GalleryState {
        let mut state = GalleryState::new(AnimalType::Cat);
        state.breeds = vec![Breed::new("beng", "Bengal")];
        state.images = vec![AnimalImage::new("a1", "https://cdn/a1.jpg")];
        state
    }

    #[test]
    fn select_animal_type_invalidates_data_and_selection() {
        let mut state = loaded_cats();
        state.query.selected_breed = Some("beng".into());
        state.query.search_term = "ben".into();

        let state = GalleryReducer::reduce(state, GalleryIntent::SelectAnimalType(AnimalType::Dog));

        assert_eq!(state.animal_type, AnimalType::Dog);
        assert!(state.breeds.is_empty());
        assert!(state.images.is_empty());
        assert_eq!(state.query.selected_breed, None);
        assert_eq!(state.query.search_term, "");
    }

    #[test]
    fn breeds_requested_keeps_prior_error() {
        let mut state = loaded_cats();
        state.query.error = Some("old".into());
        let state = GalleryReducer::reduce(state, GalleryIntent::BreedsRequested);
        assert!(state.query.is_loading);
        assert_eq!(state.error(), Some("old"));
    }

    #[test]
    fn images_requested_clears_prior_error() {
        let mut state = loaded_cats();
        state.query.error = Some("old".into());
        let state = GalleryReducer::reduce(state, GalleryIntent::ImagesRequested);
        assert!(state.query.is_loading);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn loaded_replaces_wholesale() {
        let state = loaded_cats();
        let state = GalleryReducer::reduce(
            state,
            GalleryIntent::ImagesLoaded {
                animal: AnimalType::Cat,
                images: vec![
                    AnimalImage::new("b1", "https://cdn/b1.jpg"),
                    AnimalImage::new("b2", "https://cdn/b2.jpg"),
                ],
            },
        );
        let ids: Vec<_> = state.images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
    }

    #[test]
    fn stale_type_outcomes_are_dropped() {
        let state = GalleryState::new(AnimalType::Dog);
        let state = GalleryReducer::reduce(
            state,
            GalleryIntent::BreedsLoaded {
                animal: AnimalType::Cat,
                breeds: vec![Breed::new("beng", "Bengal")],
            },
        );
        let state = GalleryReducer::reduce(
            state,
            GalleryIntent::ImagesFailed {
                animal: AnimalType::Cat,
                message: "Error fetching cats: boom".into(),
            },
        );
        assert!(state.breeds.is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn load_finished_clears_flag_even_with_others_in_flight() {
        let state = GalleryReducer::reduce(loaded_cats(), GalleryIntent::BreedsRequested);
        let state = GalleryReducer::reduce(state, GalleryIntent::ImagesRequested);
        let state = GalleryReducer::reduce(state, GalleryIntent::LoadFinished);
        assert!(!state.is_loading());
    }

    #[test]
    fn search_missed_keeps_images() {
        let state = GalleryReducer::reduce(
            loaded_cats(),
            GalleryIntent::SearchMissed {
                message: "No matching breed found.".into(),
            },
        );
        assert_eq!(state.error(), Some("No matching breed found."));
        assert_eq!(state.images.len(), 1);
    }
}
