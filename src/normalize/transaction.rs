//! Normalization of transaction list and transaction info responses.

use serde_json::{Map, Value};

use crate::{
    identifier::Identifier,
    models::{Transaction, TransactionInfo, TransactionStatus},
    normalize::{NormalizeContext, pick},
    report::{is_recognized_empty, log_unrecognized_shape},
    resolve::{resolve_date, resolve_id, resolve_name, resolve_number},
    unwrap::{unwrap_entries, unwrap_entry},
};

/// Source field names accepted for the transaction's own ID, in precedence
/// order.
const TX_ID_FIELDS: [&str; 5] = ["tx_id", "txId", "id", "_id", "transaction_id"];
const OWNER_FIELDS: [&str; 3] = ["owner_id", "ownerId", "user_id"];
const DATE_FIELDS: [&str; 4] = ["date", "tx_date", "posted_date", "created_at"];
const MERCHANT_FIELDS: [&str; 5] = [
    "merchant_text",
    "merchant",
    "tx_merchant",
    "tx_name",
    "description",
];
const AMOUNT_FIELDS: [&str; 3] = ["amount", "tx_amount", "total"];

/// Field names accepted by the transaction info endpoint, which has drifted
/// separately from the list endpoints.
const INFO_DATE_FIELDS: [&str; 4] = ["date", "tx_date", "transaction_date", "posted_date"];
const INFO_MERCHANT_FIELDS: [&str; 5] = [
    "merchant_text",
    "tx_merchant",
    "merchant",
    "description",
    "name",
];

/// Normalize a transaction collection response into canonical
/// [Transaction] records.
///
/// Entries without a resolvable transaction ID are dropped with a warning;
/// they are a normal occurrence for malformed legacy rows, not an error.
/// When the whole batch comes up empty from a non-empty response, one
/// diagnostic names the unrecognized shape.
pub fn normalize_transactions(raw: &Value, context: &NormalizeContext) -> Vec<Transaction> {
    let mut transactions = Vec::new();

    for entry in unwrap_entries(raw) {
        match normalize_transaction_entry(entry, context) {
            Some(transaction) => transactions.push(transaction),
            None => tracing::warn!(
                "{}: dropping entry without a resolvable transaction id",
                context.endpoint
            ),
        }
    }

    if transactions.is_empty() && !is_recognized_empty(raw) {
        log_unrecognized_shape(context.endpoint, raw);
    }

    transactions
}

fn normalize_transaction_entry(
    entry: &Map<String, Value>,
    context: &NormalizeContext,
) -> Option<Transaction> {
    let tx_id = pick(entry, &TX_ID_FIELDS).and_then(resolve_id)?;

    let owner_id = pick(entry, &OWNER_FIELDS)
        .and_then(resolve_id)
        .or_else(|| context.owner_id.and_then(Identifier::new));
    let date = pick(entry, &DATE_FIELDS)
        .and_then(resolve_name)
        .unwrap_or_default();
    let merchant_text = pick(entry, &MERCHANT_FIELDS)
        .and_then(resolve_name)
        .unwrap_or_default();
    let amount = pick(entry, &AMOUNT_FIELDS)
        .map(|value| resolve_number(value, 0.0))
        .unwrap_or(0.0);
    let status = pick(entry, &["status"])
        .map(TransactionStatus::from_value)
        .unwrap_or_default();

    Some(Transaction {
        tx_id,
        owner_id,
        date,
        merchant_text,
        amount,
        status,
    })
}

/// Normalize a transaction info response into a [TransactionInfo] record.
///
/// A singleton endpoint: when nothing in the response resolves to an entry,
/// the documented fallback is a zero-valued record, logged once.
pub fn normalize_transaction_info(raw: &Value, context: &NormalizeContext) -> TransactionInfo {
    match info_entry(raw) {
        Some(entry) => TransactionInfo {
            date: pick(entry, &INFO_DATE_FIELDS).and_then(resolve_date),
            merchant_text: pick(entry, &INFO_MERCHANT_FIELDS)
                .and_then(resolve_name)
                .unwrap_or_default(),
            amount: pick(entry, &AMOUNT_FIELDS)
                .map(|value| resolve_number(value, 0.0))
                .unwrap_or(0.0),
        },
        None => {
            log_unrecognized_shape(context.endpoint, raw);
            TransactionInfo::empty()
        }
    }
}

/// The entry unwrap for info responses, which additionally probes the
/// `txInfo` wrapper some backend versions nest the payload under.
fn info_entry(value: &Value) -> Option<&Map<String, Value>> {
    match value {
        Value::Array(items) => items.iter().find_map(info_entry),
        Value::Object(map) => {
            if let Some(nested) = map.get("txInfo")
                && let Some(entry) = info_entry(nested)
            {
                return Some(entry);
            }

            unwrap_entry(value)
        }
        _ => None,
    }
}

#[cfg(test)]
mod normalize_transactions_tests {
    use serde_json::json;

    use super::normalize_transactions;
    use crate::{
        identifier::Identifier,
        models::{Transaction, TransactionStatus},
        normalize::NormalizeContext,
        report::count_shape_warnings,
    };

    fn context() -> NormalizeContext<'static> {
        NormalizeContext::new("Transaction/list_all")
    }

    #[test]
    fn empty_array_yields_empty_sequence() {
        assert!(normalize_transactions(&json!([]), &context()).is_empty());
    }

    #[test]
    fn empty_results_wrapper_yields_empty_sequence() {
        assert!(normalize_transactions(&json!({"results": []}), &context()).is_empty());
    }

    #[test]
    fn modern_shape_normalizes() {
        let raw = json!([{
            "tx_id": "t1",
            "owner_id": "u1",
            "date": "2024-01-05",
            "merchant_text": "CAFE ROMA",
            "amount": -4.5,
            "status": "LABELED",
        }]);

        let transactions = normalize_transactions(&raw, &context());

        assert_eq!(
            transactions,
            vec![Transaction {
                tx_id: Identifier::new_unchecked("t1"),
                owner_id: Some(Identifier::new_unchecked("u1")),
                date: "2024-01-05".to_owned(),
                merchant_text: "CAFE ROMA".to_owned(),
                amount: -4.5,
                status: TransactionStatus::Labeled,
            }]
        );
    }

    #[test]
    fn legacy_mongo_shape_normalizes() {
        let raw = json!({"results": [{
            "tx": {
                "_id": {"$oid": "65f0aa"},
                "user_id": {"$oid": "65f0bb"},
                "posted_date": "2023-11-02",
                "description": "PAK N SAVE",
                "tx_amount": {"$numberDecimal": "-88.20"},
            },
        }]});

        let transactions = normalize_transactions(&raw, &context());

        assert_eq!(transactions.len(), 1);
        let tx = &transactions[0];
        assert_eq!(tx.tx_id.as_str(), "65f0aa");
        assert_eq!(tx.owner_id.as_ref().unwrap().as_str(), "65f0bb");
        assert_eq!(tx.date, "2023-11-02");
        assert_eq!(tx.merchant_text, "PAK N SAVE");
        assert_eq!(tx.amount, -88.2);
        assert_eq!(tx.status, TransactionStatus::Unlabeled);
    }

    #[test]
    fn entry_without_resolvable_id_is_dropped() {
        let raw = json!([
            {"merchant_text": "NO ID HERE", "amount": 1.0},
            {"tx_id": "t2", "amount": 2.0},
        ]);

        let transactions = normalize_transactions(&raw, &context());

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].tx_id.as_str(), "t2");
    }

    #[test]
    fn context_owner_backfills_missing_owner() {
        let raw = json!([{"tx_id": "t1"}]);
        let context = NormalizeContext::with_owner("Transaction/get_unlabeled_transactions", "u9");

        let transactions = normalize_transactions(&raw, &context);

        assert_eq!(
            transactions[0].owner_id,
            Some(Identifier::new_unchecked("u9"))
        );
    }

    #[test]
    fn entry_owner_wins_over_context_owner() {
        let raw = json!([{"tx_id": "t1", "owner_id": "entry-owner"}]);
        let context = NormalizeContext::with_owner("Transaction/get_unlabeled_transactions", "u9");

        let transactions = normalize_transactions(&raw, &context);

        assert_eq!(
            transactions[0].owner_id,
            Some(Identifier::new_unchecked("entry-owner"))
        );
    }

    #[test]
    fn unparseable_amount_defaults_to_zero() {
        let raw = json!([{"tx_id": "t1", "amount": "not a number"}]);

        let transactions = normalize_transactions(&raw, &context());

        assert_eq!(transactions[0].amount, 0.0);
    }

    #[test]
    fn unrecognized_status_defaults_to_unlabeled() {
        let raw = json!([{"tx_id": "t1", "status": "PENDING"}]);

        let transactions = normalize_transactions(&raw, &context());

        assert_eq!(transactions[0].status, TransactionStatus::Unlabeled);
    }

    #[test]
    fn canonical_shape_round_trips() {
        let raw = json!([{
            "tx_id": "t1",
            "owner_id": "u1",
            "date": "2024-01-05",
            "merchant_text": "CAFE ROMA",
            "amount": -4.5,
            "status": "LABELED",
        }]);

        let first = normalize_transactions(&raw, &context());
        let reserialized = serde_json::to_value(&first).unwrap();
        let second = normalize_transactions(&reserialized, &context());

        assert_eq!(first, second);
    }

    #[test]
    fn unrecognized_shape_is_diagnosed_once_per_call() {
        let raw = json!({"surprise": 1});

        let count = count_shape_warnings(|| {
            assert!(normalize_transactions(&raw, &context()).is_empty());
        });

        assert_eq!(count, 1);
    }

    #[test]
    fn all_entries_dropped_still_diagnoses_once() {
        let raw = json!([{"amount": 1.0}, {"amount": 2.0}]);

        let count = count_shape_warnings(|| {
            assert!(normalize_transactions(&raw, &context()).is_empty());
        });

        assert_eq!(count, 1);
    }

    #[test]
    fn recognized_empty_shapes_are_not_diagnosed() {
        let count = count_shape_warnings(|| {
            normalize_transactions(&json!(null), &context());
            normalize_transactions(&json!([]), &context());
            normalize_transactions(&json!({"results": []}), &context());
        });

        assert_eq!(count, 0);
    }

    #[test]
    fn output_identifiers_are_never_blank() {
        let raw = json!([
            {"tx_id": ""},
            {"tx_id": "  "},
            {"tx_id": null},
            {"tx_id": "ok"},
        ]);

        let transactions = normalize_transactions(&raw, &context());

        assert_eq!(transactions.len(), 1);
        assert!(!transactions[0].tx_id.as_str().trim().is_empty());
    }
}
