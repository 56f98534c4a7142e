//! The `Label` record and the labeling request/response DTOs.
//!
//! A label associates a transaction with a category for a user. Labels are
//! staged first and finalized in a batch, so several DTOs here describe the
//! staging session rather than a stored label.

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// A committed label document associating a transaction with a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// The ID of the label document itself. Always present and non-empty.
    pub label_id: Identifier,
    /// The user the label belongs to, when the backend sent one.
    pub user_id: Option<Identifier>,
    /// The labeled transaction. Always present and non-empty.
    pub tx_id: Identifier,
    /// The category the transaction was labeled with, when the backend sent
    /// one.
    pub category_id: Option<Identifier>,
    /// When the label was created, as the backend sent it. Empty when no
    /// date field resolved.
    pub created_at: String,
}

// ============================================================================
// REQUEST/RESPONSE DTOS
// ============================================================================

/// Request body for staging a label ahead of finalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageLabelRequest {
    /// The user staging the label.
    pub user_id: Identifier,
    /// The transaction being labeled.
    pub tx_id: Identifier,
    /// The transaction's name text, echoed for the suggestion service.
    pub tx_name: String,
    /// The transaction's merchant text, echoed for the suggestion service.
    pub tx_merchant: String,
    /// The category to label the transaction with.
    pub category_id: Identifier,
}

/// Request body for committing all of a user's staged labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalizeLabelRequest {
    /// The user whose staged labels to commit.
    pub user_id: Identifier,
}

/// Request body for discarding all of a user's staged labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CancelLabelRequest {
    /// The user whose staging session to cancel.
    pub user_id: Identifier,
}

/// Request body for moving an existing label to a different category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateLabelRequest {
    /// The user who owns the label.
    pub user_id: Identifier,
    /// The labeled transaction.
    pub tx_id: Identifier,
    /// The category to move the label to.
    pub new_category_id: Identifier,
}

/// Request body for reassigning a transaction's label to the built-in Trash
/// category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoveLabelRequest {
    /// The user who owns the label.
    pub user_id: Identifier,
    /// The transaction whose label to remove.
    pub tx_id: Identifier,
}

/// Request body for listing a user's staged labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetStagedLabelsRequest {
    /// The user whose staged labels to list.
    pub user_id: Identifier,
}

/// Request body for asking whether any labels exist for a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HasLabelsForCategoryRequest {
    /// The user who owns the category.
    pub user_id: Identifier,
    /// The category to check.
    pub category_id: Identifier,
}

/// Answer to [HasLabelsForCategoryRequest].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HasLabelsResponse {
    /// Whether any labels exist for the category.
    pub result: bool,
}

/// Request body for asking the suggestion service to pick a category for a
/// transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestLabelRequest {
    /// The user the suggestion is for.
    pub user_id: Identifier,
    /// All of the user's categories as `(id, name)` pairs.
    #[serde(rename = "allCategories")]
    pub all_categories: Vec<(Identifier, String)>,
    /// The transaction to suggest a category for.
    #[serde(rename = "txInfo")]
    pub tx_info: SuggestLabelTxInfo,
}

/// The transaction fields the suggestion service considers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestLabelTxInfo {
    /// The transaction's ID.
    pub tx_id: Identifier,
    /// The transaction's name text.
    pub tx_name: String,
    /// The transaction's merchant text.
    pub tx_merchant: String,
}

/// The suggestion service's answer: the chosen category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestLabelResponse {
    /// The suggested category's ID.
    pub id: Identifier,
    /// The suggested category's display name.
    pub name: String,
}

/// Acknowledgement carrying the affected label's transaction ID.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelTxIdResponse {
    /// The transaction whose label the operation applied to.
    pub label_tx_id: Identifier,
}
