//! The `User` record and the authentication request/response DTOs.

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Whether a user account can log in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// The account is active and can log in.
    #[default]
    Active,
    /// The account has been deactivated.
    Inactive,
}

/// An account in the system, as assembled from the authentication endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The ID of the user. Always present and non-empty.
    pub user_id: Identifier,
    /// The username the account registered with.
    pub username: String,
    /// Whether the account can log in.
    pub status: UserStatus,
    /// The active session token, when a login established one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

// ============================================================================
// REQUEST/RESPONSE DTOS
// ============================================================================

/// Request body for registering a new user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// The unique username for the new account.
    pub username: String,
    /// The plaintext password; transport security is the collaborator's
    /// concern.
    pub password: String,
}

/// Request body for authenticating an existing user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    /// The account's username.
    pub username: String,
    /// The plaintext password.
    pub password: String,
}

/// Request body for changing a user's password.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// The user changing their password.
    pub user_id: Identifier,
    /// The current password, verified by the backend.
    pub old_password: String,
    /// The replacement password.
    pub new_password: String,
}

/// A bare `{ok: ...}` acknowledgement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OkResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
}
