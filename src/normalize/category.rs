//! Normalization of category listing and category history responses.

use serde_json::{Map, Value};

use crate::{
    models::{CategoryNameOwner, CategoryTransactionEntry},
    normalize::{NormalizeContext, pick},
    report::{is_recognized_empty, log_unrecognized_shape},
    resolve::{resolve_date_string, resolve_id, resolve_name, resolve_number},
    unwrap::unwrap_entries,
};

/// Source field names accepted for the category's own ID, in precedence
/// order.
const CATEGORY_ID_FIELDS: [&str; 4] = ["category_id", "categoryId", "_id", "id"];
const NAME_FIELDS: [&str; 2] = ["name", "label"];
const OWNER_FIELDS: [&str; 3] = ["owner_id", "ownerId", "user_id"];

const ENTRY_TX_ID_FIELDS: [&str; 4] = ["tx_id", "txId", "id", "_id"];
const ENTRY_AMOUNT_FIELDS: [&str; 3] = ["amount", "tx_amount", "total"];
const ENTRY_DATE_FIELDS: [&str; 4] = ["tx_date", "date", "transaction_date", "posted_date"];
const ENTRY_CATEGORY_NAME_FIELDS: [&str; 2] = ["category_name", "name"];

/// Normalize a category listing response into canonical
/// [CategoryNameOwner] records.
///
/// Entries without a resolvable category ID are dropped with a warning.
pub fn normalize_categories(raw: &Value, context: &NormalizeContext) -> Vec<CategoryNameOwner> {
    let mut categories = Vec::new();

    for entry in unwrap_entries(raw) {
        match normalize_category_entry(entry) {
            Some(category) => categories.push(category),
            None => tracing::warn!(
                "{}: dropping entry without a resolvable category id",
                context.endpoint
            ),
        }
    }

    if categories.is_empty() && !is_recognized_empty(raw) {
        log_unrecognized_shape(context.endpoint, raw);
    }

    categories
}

fn normalize_category_entry(entry: &Map<String, Value>) -> Option<CategoryNameOwner> {
    let category_id = pick(entry, &CATEGORY_ID_FIELDS).and_then(resolve_id)?;

    Some(CategoryNameOwner {
        category_id,
        name: pick(entry, &NAME_FIELDS)
            .and_then(resolve_name)
            .unwrap_or_default(),
        owner_id: pick(entry, &OWNER_FIELDS).and_then(resolve_id),
    })
}

/// Normalize a category history response into canonical
/// [CategoryTransactionEntry] records.
///
/// Entries without a resolvable transaction ID are dropped with a warning.
pub fn normalize_category_entries(
    raw: &Value,
    context: &NormalizeContext,
) -> Vec<CategoryTransactionEntry> {
    let mut entries = Vec::new();

    for entry in unwrap_entries(raw) {
        match normalize_history_entry(entry) {
            Some(entry) => entries.push(entry),
            None => tracing::warn!(
                "{}: dropping entry without a resolvable transaction id",
                context.endpoint
            ),
        }
    }

    if entries.is_empty() && !is_recognized_empty(raw) {
        log_unrecognized_shape(context.endpoint, raw);
    }

    entries
}

fn normalize_history_entry(entry: &Map<String, Value>) -> Option<CategoryTransactionEntry> {
    let tx_id = pick(entry, &ENTRY_TX_ID_FIELDS).and_then(resolve_id)?;

    Some(CategoryTransactionEntry {
        tx_id,
        amount: pick(entry, &ENTRY_AMOUNT_FIELDS)
            .map(|value| resolve_number(value, 0.0))
            .unwrap_or(0.0),
        tx_date: pick(entry, &ENTRY_DATE_FIELDS)
            .map(resolve_date_string)
            .unwrap_or_default(),
        category_name: pick(entry, &ENTRY_CATEGORY_NAME_FIELDS).and_then(resolve_name),
    })
}

#[cfg(test)]
mod normalize_categories_tests {
    use serde_json::json;

    use super::normalize_categories;
    use crate::{
        identifier::Identifier, models::CategoryNameOwner, normalize::NormalizeContext,
        report::count_shape_warnings,
    };

    fn context() -> NormalizeContext<'static> {
        NormalizeContext::new("Category/getCategoryNamesAndOwners")
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(normalize_categories(&json!([]), &context()).is_empty());
        assert!(normalize_categories(&json!({"results": []}), &context()).is_empty());
        assert!(normalize_categories(&json!(null), &context()).is_empty());
    }

    #[test]
    fn bare_array_shape_normalizes() {
        let raw = json!([{"category_id": "c1", "name": "Groceries", "owner_id": "u1"}]);

        let categories = normalize_categories(&raw, &context());

        assert_eq!(
            categories,
            vec![CategoryNameOwner {
                category_id: Identifier::new_unchecked("c1"),
                name: "Groceries".to_owned(),
                owner_id: Some(Identifier::new_unchecked("u1")),
            }]
        );
    }

    #[test]
    fn legacy_id_and_wrapped_owner_normalize() {
        // Older backends sent `_id` and double-wrapped the owner id.
        let raw = json!([{
            "_id": "c2",
            "name": "Rent",
            "owner_id": {"value": {"value": "u7"}},
        }]);

        let categories = normalize_categories(&raw, &context());

        assert_eq!(categories[0].category_id.as_str(), "c2");
        assert_eq!(
            categories[0].owner_id,
            Some(Identifier::new_unchecked("u7"))
        );
    }

    #[test]
    fn missing_name_defaults_to_empty_string() {
        let raw = json!([{"category_id": "c3"}]);

        let categories = normalize_categories(&raw, &context());

        assert_eq!(categories[0].name, "");
    }

    #[test]
    fn entry_without_category_id_is_dropped() {
        let raw = json!([{"name": "Orphan"}, {"category_id": "c4", "name": "Kept"}]);

        let categories = normalize_categories(&raw, &context());

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Kept");
    }

    #[test]
    fn unrecognized_shape_is_diagnosed_once_per_call() {
        let count = count_shape_warnings(|| {
            assert!(normalize_categories(&json!({"surprise": 1}), &context()).is_empty());
        });

        assert_eq!(count, 1);
    }

    #[test]
    fn recognized_empty_shapes_are_not_diagnosed() {
        let count = count_shape_warnings(|| {
            normalize_categories(&json!(null), &context());
            normalize_categories(&json!({"results": []}), &context());
        });

        assert_eq!(count, 0);
    }

    #[test]
    fn canonical_shape_round_trips() {
        let raw = json!([{"category_id": "c1", "name": "Groceries", "owner_id": "u1"}]);

        let first = normalize_categories(&raw, &context());
        let reserialized = serde_json::to_value(&first).unwrap();
        let second = normalize_categories(&reserialized, &context());

        assert_eq!(first, second);
    }
}
