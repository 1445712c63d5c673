//! Core types and shared functionality for safe-search.
//!
//! This crate provides:
//! - Flat-file cache for search result sets
//! - Reconciliation policy between live and cached results
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod result;

pub use cache::{CacheStore, cache_key};
pub use config::AppConfig;
pub use error::Error;
pub use reconcile::{DEFAULT_THRESHOLD, ReconcileOptions, reconcile};
pub use result::ResultSet;
