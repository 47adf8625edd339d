use crate::ui::mvi::Reducer;

use super::observer::{Observation, Span, TargetId, ViewportObserver};
use super::state::{LazyImageIntent, LazyImageReducer, LazyImageState};

/// One image whose resource is deferred until it nears the viewport.
///
/// Owns its observer registration: the registration is released when the
/// trigger fires or when the `LazyImage` itself is dropped (unmounted),
/// whichever comes first.
#[derive(Debug)]
pub struct LazyImage {
    source: String,
    state: LazyImageState,
    observation: Option<Observation>,
}

impl LazyImage {
    /// Mount: attach to `observer` at `span`.
    pub fn mount(observer: &ViewportObserver, source: impl Into<String>, span: Span) -> Self {
        Self {
            source: source.into(),
            state: LazyImageState::Pending,
            observation: Some(observer.observe(span)),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn state(&self) -> LazyImageState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Observer id while still pending.
    pub fn target(&self) -> Option<TargetId> {
        self.observation.as_ref().map(Observation::id)
    }

    pub fn relayout(&self, span: Span) {
        if let Some(observation) = &self.observation {
            observation.set_span(span);
        }
    }

    /// Apply a trigger event. Returns `true` only for the first one.
    pub fn on_intersect(&mut self) -> bool {
        if self.state.is_loaded() {
            return false;
        }
        self.state = LazyImageReducer::reduce(self.state, LazyImageIntent::Intersected);
        self.observation = None;
        true
    }
}
