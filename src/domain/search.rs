// src/domain/search.rs

use crate::domain::listing::PropertyListing;
use crate::errors::ServerError;

/// What the map panel can show. Exactly one at a time.
#[derive(Debug)]
pub enum SearchState {
    /// Listings not fetched yet; the page shows a placeholder that loads
    /// the map fragment.
    Loading,
    Failed(String),
    Ready(Vec<PropertyListing>),
}

impl From<Result<Vec<PropertyListing>, ServerError>> for SearchState {
    fn from(result: Result<Vec<PropertyListing>, ServerError>) -> Self {
        match result {
            Ok(listings) => SearchState::Ready(listings),
            Err(err) => SearchState::Failed(err.to_string()),
        }
    }
}
