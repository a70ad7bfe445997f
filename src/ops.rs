//! Read-side operations on a loaded [`ConfigMap`]: dotted-key lookup and
//! flattened listing.

use serde_json::Value;

use crate::types::ConfigMap;

/// Navigate a [`ConfigMap`] by dotted key path (e.g. `"database.url"`).
///
/// Keys may themselves contain dots (INI allows `host.name = x`). At each
/// level the whole remaining path is tried as a literal key first, then
/// every split point from the left.
pub fn map_get<'a>(map: &'a ConfigMap, dotted_key: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(dotted_key) {
        return Some(value);
    }
    dotted_key
        .match_indices('.')
        .find_map(|(at, _)| {
            let nested = map.get(&dotted_key[..at])?.as_object()?;
            map_get(nested, &dotted_key[at + 1..])
        })
}

/// Flatten a map into `(dotted_key, display_value)` pairs, depth first in key order.
/// Sequences are kept whole and rendered as JSON.
pub fn list_entries(map: &ConfigMap) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    flatten_into(map, "", &mut entries);
    entries
}

fn flatten_into(map: &ConfigMap, prefix: &str, out: &mut Vec<(String, String)>) {
    for (key, value) in map {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => flatten_into(nested, &full, out),
            other => out.push((full, format_value(other))),
        }
    }
}

/// Format a value for display.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "<not set>".to_string(),
        other => other.to_string(),
    }
}
