//! Gazetteer collaborator: the [`GazetteerClient`] seam and its GeoNames
//! implementation.
//!
//! A gazetteer miss is an expected, frequent outcome: `search` returns an
//! empty candidate list for "no match" and only fails on genuine transport or
//! service errors.

pub mod error;
pub mod geonames;
pub mod model;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::GazetteerError;
pub use geonames::GeoNamesClient;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockGazetteerClient;
pub use model::{Candidate, SearchQuery};

use async_trait::async_trait;

/// Lookup interface required by the resolution core.
///
/// Implementations must return `Ok(vec![])` for "no results"; an `Err` means
/// the service itself could not be reached or rejected the request. Retry
/// policy, if any, belongs to the implementation, not the caller.
#[async_trait]
pub trait GazetteerClient: Send + Sync {
    /// Searches the gazetteer for candidates matching `query`, best first.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, GazetteerError>;
}
