//! File-backed store for search result sets.
//!
//! One JSON document holds every entry, keyed by derived search keys. Reads
//! and writes round-trip through the file on every call, with no in-memory
//! layer, so updates are visible across processes at the cost of I/O per
//! operation.

use crate::error::Error;
use crate::result::ResultSet;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Latest-value cache backed by a single JSON document on disk.
///
/// Each key holds the most recently stored result set until it is
/// overwritten. There is no expiry and no eviction. Concurrent writers race
/// on the read-then-write cycle and the last writer wins.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    /// Open a store at `path`, creating the backing document if absent.
    ///
    /// A fresh document is seeded with a serialized empty result set. The
    /// seed keys are inert from the document's point of view and are
    /// tolerated in lookups forever after. Parent directories are created as
    /// needed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(Error::CacheWrite)?;
        }

        if !tokio::fs::try_exists(&path).await.map_err(Error::CacheRead)? {
            let seed = serde_json::to_string(&ResultSet::default()).map_err(Error::Encode)?;
            tokio::fs::write(&path, seed).await.map_err(Error::CacheWrite)?;
        }

        Ok(Self { path })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the result set stored under `key`.
    ///
    /// Any failure on this path (missing or unreadable file, malformed
    /// document, absent key, entry that does not parse as a result set)
    /// yields the empty result set. A miss and a read failure are observably
    /// identical to the caller.
    pub async fn get(&self, key: &str) -> ResultSet {
        match self.read_document().await {
            Some(doc) => doc
                .get(key)
                .cloned()
                .and_then(|entry| serde_json::from_value(entry).ok())
                .unwrap_or_default(),
            None => ResultSet::default(),
        }
    }

    /// Store `value` under `key`, overwriting any previous entry.
    ///
    /// Reads the full document, replaces the one entry, and rewrites the
    /// whole file. Failures here propagate: a corrupt or unreadable document
    /// blocks writes until it is repaired or deleted.
    pub async fn put(&self, key: &str, value: &ResultSet) -> Result<(), Error> {
        let bytes = tokio::fs::read(&self.path).await.map_err(Error::CacheRead)?;
        let mut doc = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(doc)) => doc,
            Ok(other) => return Err(Error::Corrupt(format!("expected a JSON object, found {other}"))),
            Err(e) => return Err(Error::Corrupt(e.to_string())),
        };

        doc.insert(key.to_string(), serde_json::to_value(value).map_err(Error::Encode)?);

        let out = serde_json::to_string(&Value::Object(doc)).map_err(Error::Encode)?;
        tokio::fs::write(&self.path, out).await.map_err(Error::CacheWrite)
    }

    /// Read and parse the whole backing document, swallowing every failure.
    async fn read_document(&self) -> Option<Map<String, Value>> {
        let bytes = tokio::fs::read(&self.path).await.ok()?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(doc)) => Some(doc),
            _ => {
                tracing::debug!(path = %self.path.display(), "cache document unreadable, treating as empty");
                None
            }
        }
    }
}
