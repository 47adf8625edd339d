use crate::ui::mvi::{Intent, Reducer, UiState};

/// Lifecycle of one lazy image. `Pending → Loaded` is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LazyImageState {
    /// Placeholder shown; waiting for the viewport trigger.
    #[default]
    Pending,
    /// Trigger fired; the resource may be fetched and drawn.
    Loaded,
}

impl UiState for LazyImageState {}

impl LazyImageState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LazyImageIntent {
    /// The target came within the trigger margin of the viewport.
    Intersected,
}

impl Intent for LazyImageIntent {}

pub struct LazyImageReducer;

impl Reducer for LazyImageReducer {
    type State = LazyImageState;
    type Intent = LazyImageIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LazyImageIntent::Intersected => LazyImageState::Loaded,
        }
    }
}
