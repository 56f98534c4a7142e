//! Normalization of label document responses.

use serde_json::{Map, Value};

use crate::{
    models::Label,
    normalize::{NormalizeContext, pick},
    report::{is_recognized_empty, log_unrecognized_shape},
    resolve::{resolve_id, resolve_name},
    unwrap::unwrap_entries,
};

const LABEL_ID_FIELDS: [&str; 3] = ["_id", "id", "label_id"];
const USER_FIELDS: [&str; 3] = ["user_id", "userId", "owner_id"];
const TX_ID_FIELDS: [&str; 2] = ["tx_id", "txId"];
const CATEGORY_FIELDS: [&str; 2] = ["category_id", "categoryId"];
const CREATED_AT_FIELDS: [&str; 3] = ["created_at", "createdAt", "date"];

/// Normalize a label collection response into canonical [Label] records.
///
/// The gate here is the transaction ID: a label row that cannot be tied to
/// a transaction is unusable to the UI and is dropped with a warning. A
/// label without its own document ID falls back to the transaction ID, which
/// uniquely names the label within a user's session.
pub fn normalize_labels(raw: &Value, context: &NormalizeContext) -> Vec<Label> {
    let mut labels = Vec::new();

    for entry in unwrap_entries(raw) {
        match normalize_label_entry(entry) {
            Some(label) => labels.push(label),
            None => tracing::warn!(
                "{}: dropping label entry without a resolvable transaction id",
                context.endpoint
            ),
        }
    }

    if labels.is_empty() && !is_recognized_empty(raw) {
        log_unrecognized_shape(context.endpoint, raw);
    }

    labels
}

fn normalize_label_entry(entry: &Map<String, Value>) -> Option<Label> {
    let tx_id = pick(entry, &TX_ID_FIELDS).and_then(resolve_id)?;
    let label_id = pick(entry, &LABEL_ID_FIELDS)
        .and_then(resolve_id)
        .unwrap_or_else(|| tx_id.clone());

    Some(Label {
        label_id,
        user_id: pick(entry, &USER_FIELDS).and_then(resolve_id),
        tx_id,
        category_id: pick(entry, &CATEGORY_FIELDS).and_then(resolve_id),
        created_at: pick(entry, &CREATED_AT_FIELDS)
            .and_then(resolve_name)
            .unwrap_or_default(),
    })
}
