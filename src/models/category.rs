//! Category records and the category request/response DTOs.
//!
//! A category acts like a tag for transactions; each transaction is labeled
//! with at most one category.

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// A category together with its display name and owner, as returned by the
/// category listing endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryNameOwner {
    /// The ID of the category. Always present and non-empty.
    pub category_id: Identifier,
    /// The display name of the category. Empty when the backend sent none.
    pub name: String,
    /// The ID of the user who owns the category, when the backend sent one.
    pub owner_id: Option<Identifier>,
}

/// One transaction as it appears in a category's history.
///
/// An independent projection of the transaction: it shares the `tx_id`
/// value with [crate::models::Transaction] but owns its own data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryTransactionEntry {
    /// The ID of the transaction. Always present and non-empty.
    pub tx_id: Identifier,
    /// The amount of the transaction. Always finite.
    pub amount: f64,
    /// When the transaction happened, ISO-8601, or empty when no date field
    /// resolved.
    pub tx_date: String,
    /// The display name of the category, when the row carried one.
    pub category_name: Option<String>,
}

// ============================================================================
// REQUEST/RESPONSE DTOS
// ============================================================================

/// Request body for creating a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    /// The user who will own the category.
    pub owner_id: Identifier,
    /// The display name of the new category.
    pub name: String,
}

/// Request body for renaming a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenameCategoryRequest {
    /// The owner of the category.
    pub owner_id: Identifier,
    /// The category to rename.
    pub category_id: Identifier,
    /// The new display name.
    pub new_name: String,
}

/// Request body for deleting a category and its metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteCategoryRequest {
    /// The owner of the category.
    pub owner_id: Identifier,
    /// The category to delete.
    pub category_id: Identifier,
    /// Whether the caller has confirmed the category is safe to delete.
    pub can_delete: bool,
}

/// Request body for creating or updating a category metric's total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetMetricTotalRequest {
    /// The owner of the category.
    pub owner_id: Identifier,
    /// The category the metric belongs to.
    pub category_id: Identifier,
    /// The start of the metric period, ISO-8601.
    pub period_start: String,
    /// The new total for the period.
    pub total: f64,
}

/// Request body for fetching one category metric document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetMetricRequest {
    /// The owner of the category.
    pub owner_id: Identifier,
    /// The category the metric belongs to.
    pub category_id: Identifier,
    /// The start of the metric period, ISO-8601.
    pub period_start: String,
}

/// Request body for listing all metrics of a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListMetricsRequest {
    /// The owner of the category.
    pub owner_id: Identifier,
    /// The category whose metrics to list.
    pub category_id: Identifier,
}

/// Acknowledgement carrying the affected category's ID.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryIdResponse {
    /// The category the operation applied to.
    pub category_id: Identifier,
}
