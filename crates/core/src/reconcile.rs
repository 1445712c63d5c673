//! Reconciliation between live and cached result sets.
//!
//! The search pipeline fetches a live result set and reads the cached one,
//! then asks this module which of the two (or their union) the caller should
//! see. A live set that shrank far below the cached size is treated as a
//! transient partial outage of the search backend and overridden.

use crate::result::ResultSet;

/// Default size threshold, in percent.
pub const DEFAULT_THRESHOLD: i64 = 90;

/// Per-call reconciliation options.
///
/// Built fresh for every search call from caller-supplied arguments; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Minimum percentage of the cached row count the live row count must
    /// reach to be trusted over the cache.
    pub threshold: i64,

    /// Union live and cached rows instead of picking one side.
    pub merge: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, merge: false }
    }
}

impl ReconcileOptions {
    /// Build options from caller-supplied values.
    ///
    /// A threshold outside 0–100 is silently replaced by the default, never
    /// rejected.
    pub fn new(threshold: i64, merge: bool) -> Self {
        let threshold = if (0..=100).contains(&threshold) { threshold } else { DEFAULT_THRESHOLD };
        Self { threshold, merge }
    }
}

/// Decide which of the live and cached result sets the caller gets.
///
/// With `merge` set, rows are unioned with live entries winning on key
/// collision; the merged set restarts at offset 0 and reports its own row
/// count as the total, so it must not be treated as a page of the live
/// result set. Otherwise the cached set overrides a live set whose row count
/// fell below `threshold` percent of the cached row count, and the live set
/// passes through unchanged in every other case.
pub fn reconcile(live: ResultSet, cached: ResultSet, opts: &ReconcileOptions) -> ResultSet {
    if opts.merge {
        let mut rows = cached.rows;
        rows.extend(live.rows);
        let total = rows.len() as u64;
        return ResultSet { rows, start: 0, total };
    }

    // Integer division would floor sub-100 thresholds to zero.
    let floor = cached.rows.len() as f64 * (opts.threshold as f64 / 100.0);
    if (live.rows.len() as f64) < floor {
        tracing::warn!(
            live = live.rows.len(),
            cached = cached.rows.len(),
            threshold = opts.threshold,
            "live result set anomalously small, serving cached fallback"
        );
        cached
    } else {
        live
    }
}
