//! Gallery data flow: breed list, image list and query state.
//!
//! - `state.rs` - data sets plus loading/error flags
//! - `intent.rs` - user actions and fetch outcomes
//! - `reducer.rs` - state transitions (pure)
//! - `search.rs` - breed search by name
//! - `fetcher.rs` - async requests feeding outcomes back as intents

mod fetcher;
mod intent;
mod reducer;
mod search;
mod state;

pub use fetcher::{
    breeds_error_message, images_error_message, FetchCommand, FetchEvent, FetchSink, Fetcher,
};
pub use intent::GalleryIntent;
pub use reducer::GalleryReducer;
pub use search::{find_breed, SearchError};
pub use state::{GalleryState, QueryState};
