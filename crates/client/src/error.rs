//! Search pipeline error types.

/// Errors surfaced by the search pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The remote search collaborator failed.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The cache could not persist the live result.
    #[error(transparent)]
    Cache(#[from] safe_search_core::Error),
}

impl SearchError {
    /// Wrap a collaborator failure for propagation.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        SearchError::Backend(Box::new(err))
    }
}
