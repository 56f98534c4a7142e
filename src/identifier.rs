//! The canonical identifier token used to name every entity instance.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A non-empty string token uniquely naming a transaction, category, label,
/// owner, or user.
///
/// Backends have sent identifiers as bare strings, numbers, and MongoDB
/// `{$oid: ...}` wrappers; [crate::resolve::resolve_id] absorbs those shapes
/// and produces this type. An `Identifier` is never empty and never the
/// literal text of a JSON `null`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Identifier(String);

/// The error produced when an identifier string is empty or whitespace-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("an identifier must contain at least one non-whitespace character")]
pub struct BlankIdentifier;

impl Identifier {
    /// Create an identifier from a string.
    ///
    /// Returns `None` if `token` is empty or blank after trimming. The
    /// original string is preserved untrimmed; trimming is only used for the
    /// emptiness test.
    pub fn new(token: &str) -> Option<Self> {
        Self::try_from(token.to_owned()).ok()
    }

    /// Create an identifier without the blankness check.
    ///
    /// The caller should ensure the string is not blank. This is not `unsafe`
    /// because a blank identifier causes incorrect behaviour, not a memory
    /// safety issue.
    pub fn new_unchecked(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = BlankIdentifier;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        if token.trim().is_empty() {
            Err(BlankIdentifier)
        } else {
            Ok(Self(token))
        }
    }
}
