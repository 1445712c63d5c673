//! Flat-file cache for search result sets.
//!
//! One JSON document holds every entry, keyed by a derived search key.
//! It supports:
//!
//! - Deterministic key derivation from (index, query, arguments)
//! - Whole-document reads and writes with cross-process visibility
//! - Fail-soft reads: a miss and a read failure look the same
//!
//! There is no TTL and no eviction; each key holds the latest value until it
//! is overwritten or the backing document is deleted externally.

pub mod key;
pub mod store;

pub use key::cache_key;
pub use store::CacheStore;
