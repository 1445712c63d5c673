//! The search pipeline: fetch, reconcile, cache, paginate.

use crate::backend::SearchBackend;
use crate::error::SearchError;
use safe_search_core::{AppConfig, CacheStore, DEFAULT_THRESHOLD, ReconcileOptions, ResultSet, cache_key, reconcile};
use serde_json::{Map, Value};

/// Search front-end that shields callers from flaky live results.
///
/// Each call runs the full pipeline: read the cached entry for the derived
/// key, fetch live from the backend, reconcile the two, persist the live
/// result for next time, and hand back the reconciled set. With the fallback
/// capability disabled the pipeline degrades to a plain passthrough around
/// the backend.
pub struct SafeQuery<B> {
    backend: B,
    cache: CacheStore,
    config: AppConfig,
}

impl<B: SearchBackend> SafeQuery<B> {
    /// Open the backing cache document and wire up the pipeline.
    pub async fn new(backend: B, config: AppConfig) -> Result<Self, SearchError> {
        let cache = CacheStore::open(&config.cache_path).await?;
        Ok(Self { backend, cache, config })
    }

    /// Run one pipeline iteration and return the reconciled result set.
    ///
    /// The recognized options (`threshold`, `merge`) are consumed from
    /// `args`; everything else is forwarded to the backend verbatim and
    /// participates in key derivation. Backend failures propagate
    /// unmodified, as do cache write failures.
    pub async fn search(&self, index: &str, query: &str, args: Map<String, Value>) -> Result<ResultSet, SearchError> {
        let (query_args, opts) = split_options(args);
        self.search_page(index, query, &query_args, &opts).await
    }

    /// Stream every row of every page through `on_row`, returning `true`
    /// once the walk completes.
    ///
    /// After delivering a page this advances the `start` argument by the
    /// caller's `rows` page size and re-runs the whole pipeline until the
    /// reconciled result reports completion; each iteration runs the full
    /// fetch and cache cycle under its own key. A merged result reports its own
    /// row count as the total, so merge-mode walks finish after one page.
    pub async fn search_rows<F>(
        &self, index: &str, query: &str, args: Map<String, Value>, mut on_row: F,
    ) -> Result<bool, SearchError>
    where
        F: FnMut(&str, &Value),
    {
        let (mut query_args, opts) = split_options(args);

        loop {
            let page = self.search_page(index, query, &query_args, &opts).await?;

            for (id, row) in &page.rows {
                on_row(id, row);
            }

            if page.is_complete() {
                return Ok(true);
            }

            let step = query_args.get("rows").and_then(Value::as_u64).unwrap_or(0);
            query_args.insert("start".to_string(), Value::from(page.start + step));
        }
    }

    /// Collect every row across all pages.
    pub async fn collect_rows(
        &self, index: &str, query: &str, args: Map<String, Value>,
    ) -> Result<Vec<(String, Value)>, SearchError> {
        let mut rows = Vec::new();
        self.search_rows(index, query, args, |id, row| rows.push((id.to_string(), row.clone()))).await?;
        Ok(rows)
    }

    /// One fetch-reconcile-cache cycle for a fixed set of arguments.
    async fn search_page(
        &self, index: &str, query: &str, args: &Map<String, Value>, opts: &ReconcileOptions,
    ) -> Result<ResultSet, SearchError> {
        if !self.config.fallback_enabled {
            return self.backend.fetch(index, query, args).await;
        }

        let key = cache_key(index, query, args);
        let cached = self.cache.get(&key).await;
        tracing::debug!(index, query, cached_rows = cached.rows.len(), "running search pipeline");

        let live = self.backend.fetch(index, query, args).await?;

        let reconciled = reconcile(live.clone(), cached, opts);
        self.cache.put(&key, &live).await?;

        Ok(reconciled)
    }
}

/// Split the recognized reconciliation options out of the caller arguments.
///
/// `threshold` and `merge` are consumed here so they never reach the backend
/// or the cache key; a missing or unusable value falls back to its default.
fn split_options(mut args: Map<String, Value>) -> (Map<String, Value>, ReconcileOptions) {
    let threshold = args.remove("threshold").and_then(|v| v.as_i64()).unwrap_or(DEFAULT_THRESHOLD);
    let merge = args.remove("merge").and_then(|v| v.as_bool()).unwrap_or(false);
    (args, ReconcileOptions::new(threshold, merge))
}
