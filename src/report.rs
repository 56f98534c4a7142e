//! Diagnostics for batches that normalize to nothing.
//!
//! Partial failures inside a batch are logged and skipped by the
//! normalizers themselves. This module covers the whole-batch case: a
//! response that yields no records at all is either a recognized empty
//! result (fine, stay quiet) or an unrecognized shape worth a warning so
//! drift in the backend gets noticed. Logging here is observability only
//! and never changes what a normalizer returns.

use std::sync::Mutex;

use serde_json::Value;

/// Container wrapper keys a recognized empty result may hide behind.
const EMPTY_WRAPPER_KEYS: [&str; 6] = [
    "results",
    "data",
    "transactions",
    "items",
    "values",
    "metrics",
];

/// Whether `raw` is a shape the backend is known to send for "no data".
///
/// Recognized empties are `null`, an empty array, an `{ok: true}`
/// acknowledgement, and a wrapper whose matched collection key holds a
/// recognized empty shape (e.g. `{results: []}`).
pub fn is_recognized_empty(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => {
            if map.get("ok") == Some(&Value::Bool(true)) {
                return true;
            }

            EMPTY_WRAPPER_KEYS
                .iter()
                .find_map(|key| map.get(*key))
                .is_some_and(is_recognized_empty)
        }
        _ => false,
    }
}

/// Emit the one-per-call diagnostic for a non-empty response that produced
/// no records and matched no known empty-result convention.
pub fn log_unrecognized_shape(endpoint: &str, raw: &Value) {
    tracing::warn!("{endpoint}: unrecognized response shape: {raw}");
}

/// A sink that receives the raw payload handed to a normalizer, before any
/// unwrapping.
///
/// Callers that want to inspect what the backend actually sent (typically
/// while chasing a drift regression) pass an implementation into the
/// normalizer call. The sink is owned by the caller; the normalizers never
/// read from it and its contents never influence normalization output.
pub trait RawResponseSink {
    /// Record one raw response payload.
    fn capture(&self, raw: &Value);
}

/// A last-writer-wins cell holding the most recent captured payload.
///
/// Concurrent writers may interleave arbitrarily; readers observe some
/// recently written value. This is the off-the-shelf [RawResponseSink] for
/// callers that only care about the latest response.
#[derive(Debug, Default)]
pub struct LastRawResponse {
    latest: Mutex<Option<Value>>,
}

impl LastRawResponse {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone the most recently captured payload, if any.
    pub fn snapshot(&self) -> Option<Value> {
        match self.latest.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Remove and return the most recently captured payload, if any.
    pub fn take(&self) -> Option<Value> {
        match self.latest.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

impl RawResponseSink for LastRawResponse {
    fn capture(&self, raw: &Value) {
        match self.latest.lock() {
            Ok(mut guard) => *guard = Some(raw.clone()),
            Err(poisoned) => *poisoned.into_inner() = Some(raw.clone()),
        }
    }
}

#[cfg(test)]
pub(crate) use testing::count_shape_warnings;
