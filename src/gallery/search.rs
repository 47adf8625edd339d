use thiserror::Error;

use crate::api::Breed;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("No matching breed found.")]
    NoMatch,
}

/// First breed whose name contains `term`, ignoring case.
///
/// An empty term matches the first breed.
pub fn find_breed<'a>(term: &str, breeds: &'a [Breed]) -> Result<&'a Breed, SearchError> {
    let needle = term.to_lowercase();
    breeds
        .iter()
        .find(|breed| breed.name.to_lowercase().contains(&needle))
        .ok_or(SearchError::NoMatch)
}
