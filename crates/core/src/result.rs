//! Search result set model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of search results plus the pagination frame it was cut from.
///
/// `rows` maps row identifiers to their payloads. Insertion order follows the
/// remote scan order, which is the order pagination delivers rows in; merging
/// ignores order entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Row identifier → row payload.
    #[serde(default)]
    pub rows: IndexMap<String, Value>,

    /// Zero-based offset of the first row relative to the full remote set.
    #[serde(default)]
    pub start: u64,

    /// Total rows available remotely for the query, pre-pagination.
    #[serde(default)]
    pub total: u64,
}

impl ResultSet {
    /// Whether this page is the last one the remote has for the query.
    ///
    /// Callers rely on `start + rows.len() <= total` holding remotely; the
    /// check is satisfied immediately when `total` is 0.
    pub fn is_complete(&self) -> bool {
        self.start + self.rows.len() as u64 >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let set = ResultSet::default();
        assert!(set.rows.is_empty());
        assert_eq!(set.start, 0);
        assert_eq!(set.total, 0);
    }

    #[test]
    fn test_complete_when_total_zero() {
        assert!(ResultSet::default().is_complete());
    }

    #[test]
    fn test_complete_on_last_page() {
        let mut set = ResultSet { start: 8, total: 10, ..Default::default() };
        set.rows.insert("a".into(), Value::from(1));
        set.rows.insert("b".into(), Value::from(2));
        assert!(set.is_complete());

        set.start = 6;
        assert!(!set.is_complete());
    }

    #[test]
    fn test_missing_fields_default() {
        let set: ResultSet = serde_json::from_str("{}").unwrap();
        assert_eq!(set, ResultSet::default());
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let set: ResultSet = serde_json::from_str(r#"{"rows":{"z":1,"a":2,"m":3},"start":0,"total":3}"#).unwrap();
        let ids: Vec<&str> = set.rows.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }
}
