//! Reducer primitives shared by the gallery and the lazy image loader.
//!
//! ```text
//! key press / fetch outcome / viewport scan
//!        │
//!        ▼
//!     Intent ──→ Reducer ──→ State ──→ draw()
//! ```
//!
//! Reducers are pure. Anything with a side effect (sending a fetch command,
//! spawning a task, touching the observer) happens in the caller around the
//! dispatch, which keeps every state transition testable without a runtime.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
