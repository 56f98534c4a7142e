//! Client-side normalization layer for the FlashFinance API.
//!
//! The backend's response shapes have drifted repeatedly: field renames
//! (`owner_id` vs `user_id`), wrapping changes (bare arrays vs
//! `{results: [...]}`), and encoding changes (ISO date strings vs epoch
//! numbers vs `{$date: ...}`, MongoDB extended-JSON number wrappers). This
//! crate absorbs that drift. It takes an already-deserialized
//! [serde_json::Value] from the transport layer and produces canonical,
//! strongly-typed records, never an error: a resolver that cannot make
//! sense of a value signals absence, an entry without an identifier is
//! dropped and logged, and an unrecognizable batch degrades to an empty
//! sequence (or a zero-valued record, for metrics) with a diagnostic.
//!
//! The crate performs no network I/O and holds no state; transport,
//! endpoint selection, and retries belong to the caller.

#![warn(missing_docs)]

pub mod lookup;
pub mod models;
pub mod normalize;
pub mod report;
pub mod resolve;
pub mod unwrap;

mod error;
mod identifier;

pub use error::Error;
pub use identifier::{BlankIdentifier, Identifier};
