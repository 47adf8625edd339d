//! Client for TheCatAPI / TheDogAPI.
//!
//! Both services share the same shape: `/v1/breeds` lists breeds and
//! `/v1/images/search` returns image records, optionally filtered by breed.
//! Only the host differs per [`AnimalType`].

mod client;
mod error;
mod types;

pub use client::PetApiClient;
pub use error::FetchError;
pub use types::{AnimalImage, AnimalType, Breed, UNKNOWN_BREED};
