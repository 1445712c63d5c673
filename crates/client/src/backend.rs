//! Remote search collaborator seam.

use crate::error::SearchError;
use async_trait::async_trait;
use safe_search_core::ResultSet;
use serde_json::{Map, Value};

/// Remote search collaborator.
///
/// This allows swapping the transport without changing pipeline code.
/// Implementations perform one fetch per call and surface their own
/// failures (network, auth, bad request); the pipeline adds no retry and no
/// timeout on top.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetch one page of results for `query` against the `index` collection.
    ///
    /// `args` carries pagination and backend-specific parameters verbatim.
    async fn fetch(&self, index: &str, query: &str, args: &Map<String, Value>) -> Result<ResultSet, SearchError>;
}
