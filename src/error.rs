//! The crate error type.
//!
//! Normalization itself never fails: resolvers signal absence with `Option`
//! and normalizers degrade to defaults. The only fallible surface is the
//! lookup seam in [crate::lookup], where a transport collaborator can
//! genuinely report an error.

/// The errors that may be reported by a lookup collaborator.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The collaborator found no record matching the given identifiers.
    #[error("the requested record could not be found")]
    NotFound,

    /// The collaborator failed for a reason outside this crate's control,
    /// e.g. a transport error. The string is the collaborator's own
    /// description and is only intended for logs.
    #[error("lookup failed: {0}")]
    Lookup(String),
}
