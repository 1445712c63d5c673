//! Client code for safe-search.
//!
//! This crate provides the remote-backend seam and the caller-facing search
//! pipeline that composes cache reads, live fetches, and reconciliation.

pub mod backend;
pub mod error;
pub mod query;

pub use backend::SearchBackend;
pub use error::SearchError;
pub use query::SafeQuery;
