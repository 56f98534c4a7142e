//! The `Transaction` record, its labeling status, and the transaction
//! request/response DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::identifier::Identifier;

/// Whether a transaction has been assigned to a category yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// The transaction has not been labeled with a category.
    #[default]
    Unlabeled,
    /// The transaction has been labeled with a category.
    Labeled,
}

impl TransactionStatus {
    /// Read a status from a dynamic value.
    ///
    /// Only the exact strings `"LABELED"` and `"UNLABELED"` are recognized;
    /// anything else, including absence, is treated as unlabeled.
    pub fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some("LABELED") => Self::Labeled,
            Some("UNLABELED") => Self::Unlabeled,
            _ => Self::Unlabeled,
        }
    }
}

/// An imported bank transaction, i.e. an event where money was spent or
/// earned, as the rest of the application sees it.
///
/// Instances are produced by
/// [crate::normalize::normalize_transactions]; the identifier and amount
/// invariants of that normalizer hold for every value of this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction. Always present and non-empty.
    pub tx_id: Identifier,
    /// The ID of the user who owns the transaction, when the backend sent
    /// one.
    pub owner_id: Option<Identifier>,
    /// When the transaction happened, as the backend sent it. Empty when no
    /// date field resolved.
    pub date: String,
    /// The merchant or description text. Empty when nothing resolved.
    pub merchant_text: String,
    /// The amount of money spent or earned. Always finite; zero when the
    /// backend's value was unparseable.
    pub amount: f64,
    /// Whether the transaction has been labeled.
    pub status: TransactionStatus,
}

/// The parsed info for a single transaction, used for lightweight
/// read-mostly lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    /// When the transaction happened, when a date field resolved.
    #[serde(with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    /// The merchant or description text. Empty when nothing resolved.
    pub merchant_text: String,
    /// The amount of money spent or earned. Always finite.
    pub amount: f64,
}

impl TransactionInfo {
    /// The record returned when a response contains no usable info at all.
    pub fn empty() -> Self {
        Self {
            date: None,
            merchant_text: String::new(),
            amount: 0.0,
        }
    }
}

// ============================================================================
// REQUEST/RESPONSE DTOS
// ============================================================================

/// Request body for importing a CSV statement as unlabeled transactions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportTransactionsRequest {
    /// The user who will own the imported transactions.
    pub owner_id: Identifier,
    /// The raw CSV text of the bank statement.
    #[serde(rename = "fileContent")]
    pub file_content: String,
}

/// Request body for marking a transaction as labeled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkLabeledRequest {
    /// The transaction to mark.
    pub tx_id: Identifier,
    /// The user making the request; the backend verifies ownership.
    pub requester_id: Identifier,
}

/// Request body for fetching a single transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetTransactionRequest {
    /// The owner of the transaction.
    pub owner_id: Identifier,
    /// The transaction to fetch.
    pub tx_id: Identifier,
}

/// Request body for listing a user's unlabeled transactions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetUnlabeledTransactionsRequest {
    /// The user whose unlabeled transactions to list.
    pub owner_id: Identifier,
}

/// Request body for fetching the parsed info of a transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetTxInfoRequest {
    /// The owner of the transaction.
    pub owner_id: Identifier,
    /// The transaction whose info to fetch.
    pub tx_id: Identifier,
}

/// Acknowledgement carrying the affected transaction's ID.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TxIdResponse {
    /// The transaction the operation applied to.
    pub tx_id: Identifier,
}
