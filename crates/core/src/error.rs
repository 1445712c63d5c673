//! Unified error types for safe-search.

/// Errors surfaced by the cache layer.
///
/// Only the write path reports errors; cache reads fail soft to the empty
/// result set and never surface anything.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Backing document could not be read back for a rewrite.
    #[error("cache read failed: {0}")]
    CacheRead(#[source] std::io::Error),

    /// Backing document could not be written.
    #[error("cache write failed: {0}")]
    CacheWrite(#[source] std::io::Error),

    /// Backing document is not a JSON object.
    #[error("cache document corrupt: {0}")]
    Corrupt(String),

    /// A result set failed to serialize.
    #[error("cache encode failed: {0}")]
    Encode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Corrupt("expected a JSON object".into());
        assert!(err.to_string().contains("corrupt"));
        assert!(err.to_string().contains("expected a JSON object"));

        let err = Error::CacheWrite(std::io::Error::other("disk full"));
        assert!(err.to_string().contains("cache write failed"));
    }
}
