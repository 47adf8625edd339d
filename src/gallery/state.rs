use crate::api::{AnimalImage, AnimalType, Breed};
use crate::ui::mvi::UiState;

/// Transient query state shown around the grid. Never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState {
    /// Id of the breed filter, `None` for "All Breeds".
    pub selected_breed: Option<String>,
    pub search_term: String,
    /// Last writer wins across overlapping fetches.
    pub is_loading: bool,
    /// Only the most recent error is kept.
    pub error: Option<String>,
}

/// Everything the gallery view needs: the data sets plus query state.
///
/// `breeds` and `images` always belong to `animal_type`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    pub animal_type: AnimalType,
    pub breeds: Vec<Breed>,
    pub images: Vec<AnimalImage>,
    pub query: QueryState,
}

impl UiState for GalleryState {}

impl GalleryState {
    pub fn new(animal_type: AnimalType) -> Self {
        Self {
            animal_type,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.query.error.as_deref()
    }

    pub fn selected_breed(&self) -> Option<&str> {
        self.query.selected_breed.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.query.search_term
    }

    /// Position of the selected breed in `breeds`, if it is still listed.
    pub fn selected_breed_index(&self) -> Option<usize> {
        let id = self.selected_breed()?;
        self.breeds.iter().position(|breed| breed.id == id)
    }

    /// Name shown in the breed selector.
    pub fn selected_breed_label(&self) -> &str {
        match self.selected_breed() {
            None => "All Breeds",
            Some(id) => self
                .breeds
                .iter()
                .find(|breed| breed.id == id)
                .map(|breed| breed.name.as_str())
                .unwrap_or(id),
        }
    }
}
