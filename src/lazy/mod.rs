//! Viewport-proximity lazy image loading.
//!
//! - `observer.rs` - one-shot visibility observer with owned registrations
//! - `state.rs` - Pending/Loaded state machine (reducer)
//! - `loader.rs` - per-card lazy image tying the two together
//! - `thumbnail.rs` - decoding fetched bytes into half-block cells

mod loader;
mod observer;
mod state;
mod thumbnail;

pub use loader::LazyImage;
pub use observer::{Observation, Span, TargetId, ViewportObserver};
pub use state::{LazyImageIntent, LazyImageReducer, LazyImageState};
pub use thumbnail::{HalfBlock, Thumbnail, ThumbnailSize};
