//! The canonical domain records and the request/response DTOs exchanged
//! with the transport collaborator.
//!
//! Every record here is fully typed and validated: once a normalizer hands
//! one back, the rest of the application can consume it without further
//! shape-checking. Records are constructed fresh per normalization call and
//! have no mutation API.

pub use category::{
    CategoryIdResponse, CategoryNameOwner, CategoryTransactionEntry, CreateCategoryRequest,
    DeleteCategoryRequest, GetMetricRequest, ListMetricsRequest, RenameCategoryRequest,
    SetMetricTotalRequest,
};
pub use label::{
    CancelLabelRequest, FinalizeLabelRequest, GetStagedLabelsRequest, HasLabelsForCategoryRequest,
    HasLabelsResponse, Label, LabelTxIdResponse, RemoveLabelRequest, StageLabelRequest,
    SuggestLabelRequest, SuggestLabelResponse, SuggestLabelTxInfo, UpdateLabelRequest,
};
pub use metrics::MetricStats;
pub use transaction::{
    GetTransactionRequest, GetTxInfoRequest, GetUnlabeledTransactionsRequest,
    ImportTransactionsRequest, MarkLabeledRequest, Transaction, TransactionInfo,
    TransactionStatus, TxIdResponse,
};
pub use user::{
    AuthenticateRequest, ChangePasswordRequest, OkResponse, RegisterRequest, User, UserStatus,
};

mod category;
mod label;
mod metrics;
mod transaction;
mod user;
