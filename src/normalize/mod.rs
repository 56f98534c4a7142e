//! Per-entity normalizers that turn a raw API response into canonical
//! records.
//!
//! Every normalizer follows the same algorithm: unwrap the response into a
//! flat sequence of entries, resolve each canonical field from a fixed
//! precedence list of accepted source field names, and drop entries that
//! fail the identifier validity gate. Partial failures are logged and
//! skipped; an all-failed batch degrades to an empty sequence (or a
//! zero-valued record, for metrics) rather than an error. Normalizers are
//! stateless and idempotent per call, and safe to invoke concurrently.

use serde_json::{Map, Value};

pub use category::{normalize_categories, normalize_category_entries};
pub use label::normalize_labels;
pub use metrics::normalize_metric_stats;
pub use transaction::{normalize_transaction_info, normalize_transactions};

mod category;
mod label;
mod metrics;
mod transaction;

/// The request context a normalizer runs under.
///
/// This is the typed, caller-validated side of the boundary: the caller
/// knows which endpoint it hit and on whose behalf, and passes that down so
/// diagnostics can name the endpoint and entries missing an owner can be
/// backfilled.
#[derive(Clone, Copy, Debug)]
pub struct NormalizeContext<'a> {
    /// The endpoint the response came from, used to label diagnostics.
    pub endpoint: &'a str,
    /// The ID of the user the request was made for, used as the default
    /// owner when an entry carries none.
    pub owner_id: Option<&'a str>,
}

impl<'a> NormalizeContext<'a> {
    /// Create a context with no default owner.
    pub fn new(endpoint: &'a str) -> Self {
        Self {
            endpoint,
            owner_id: None,
        }
    }

    /// Create a context that backfills `owner_id` on entries missing one.
    pub fn with_owner(endpoint: &'a str, owner_id: &'a str) -> Self {
        Self {
            endpoint,
            owner_id: Some(owner_id),
        }
    }
}

/// Select the value for a canonical field from a precedence list of source
/// field names.
///
/// The first key *present* in the entry claims the field, whatever its
/// value; later keys are never consulted, so a key holding `null` or a
/// wrapper shape is handled by the scalar resolver's own fallback chain
/// rather than by skipping to the next key.
pub(crate) fn pick<'a>(entry: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| entry.get(*key))
}
