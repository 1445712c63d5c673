//! Cache key derivation.

use serde_json::{Map, Value};

/// Derive the cache key for a search call.
///
/// The key is the literal `index-query-args` concatenation with every
/// whitespace character stripped out; no hashing. `serde_json::Map` keeps
/// its entries sorted, so semantically equal argument sets always stringify
/// the same way regardless of the order the caller inserted them in.
pub fn cache_key(index: &str, query: &str, args: &Map<String, Value>) -> String {
    let args = Value::Object(args.clone()).to_string();
    format!("{index}-{query}-{args}").chars().filter(|c| !c.is_whitespace()).collect()
}
