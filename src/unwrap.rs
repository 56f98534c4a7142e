//! Unwrapping of collection and entry wrapper conventions.
//!
//! Different backend versions have wrapped the logically-relevant payload in
//! different container shapes: bare arrays, `{results: [...]}`,
//! `{data: {...}}`, and per-element wrappers such as `{tx: {...}}`. Some
//! responses wrap the collection *and* each element, e.g.
//! `{results: [{tx: {...}}, ...]}`, which is why unwrapping is split into a
//! container level and an entry level.
//!
//! Both functions are total: they always terminate and never panic,
//! regardless of input shape.

use serde_json::{Map, Value};

/// Container-level wrapper keys, probed in order. The first key present
/// claims the container, whatever its value turns out to be.
const CONTAINER_KEYS: [&str; 6] = [
    "results",
    "data",
    "transactions",
    "items",
    "values",
    "metrics",
];

/// Entry-level wrapper keys, probed in order.
const ENTRY_KEYS: [&str; 5] = ["tx", "transaction", "value", "data", "item"];

/// Flatten a dynamic value that may represent zero, one, or many logical
/// entries into an ordered sequence of entry objects.
///
/// Rules, applied at the container level:
/// - `null` yields an empty sequence.
/// - An array yields its elements, each passed through [unwrap_entry];
///   elements that are not valid entries are skipped.
/// - An object is probed for the known container wrapper keys (`results`,
///   `data`, ...); the first key present is recursively unwrapped as a
///   container, so a wrapper holding a single object still yields one entry.
/// - Anything else is treated as a one-element container around the value
///   itself.
pub fn unwrap_entries(value: &Value) -> Vec<&Map<String, Value>> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().filter_map(unwrap_entry).collect(),
        Value::Object(map) => {
            if let Some(inner) = CONTAINER_KEYS.iter().find_map(|key| map.get(*key)) {
                return unwrap_entries(inner);
            }

            unwrap_entry(value).into_iter().collect()
        }
        other => unwrap_entry(other).into_iter().collect(),
    }
}

/// Reduce a single logical entry to its innermost object.
///
/// Arrays are tried element by element, short-circuiting on the first
/// element that yields an entry. Objects are probed for the nested wrapper
/// keys (`tx`, `transaction`, ...); a present key whose value fails to
/// unwrap falls through to the next key, and when no key produces an entry
/// the object itself is the entry. Primitive values are never valid entries.
pub fn unwrap_entry(value: &Value) -> Option<&Map<String, Value>> {
    match value {
        Value::Array(items) => items.iter().find_map(unwrap_entry),
        Value::Object(map) => {
            for key in ENTRY_KEYS {
                if let Some(nested) = map.get(key)
                    && let Some(entry) = unwrap_entry(nested)
                {
                    return Some(entry);
                }
            }

            Some(map)
        }
        _ => None,
    }
}
