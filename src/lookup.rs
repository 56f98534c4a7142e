//! Composed lookups that map category identifiers to display names.
//!
//! Resolving the display names for N categories takes N independent
//! sub-lookups against the transport collaborator. Each one can fail on its
//! own; a failure is caught locally and mapped to a per-item fallback (the
//! raw identifier standing in for the name) so one broken lookup never
//! fails its siblings or aborts the batch. This is the only place in the
//! crate where a collaborator error can surface at all.

use crate::{error::Error, identifier::Identifier};

/// A collaborator that can fetch the display name of a category.
///
/// Implemented by the transport layer; this crate only defines the seam.
/// The caller may issue lookups for independent categories concurrently,
/// since nothing here holds shared state.
pub trait CategoryNameSource {
    /// Fetch the display name of `category_id` as owned by `owner_id`.
    fn category_name(&self, owner_id: &str, category_id: &str) -> Result<String, Error>;
}

/// Resolve display names for a batch of category identifiers.
///
/// Returns one `(id, name)` pair per input identifier, in input order. A
/// lookup that fails or comes back blank is logged at error level and
/// replaced with the raw identifier as the display name.
pub fn resolve_display_names<S>(
    source: &S,
    owner_id: &Identifier,
    category_ids: &[Identifier],
) -> Vec<(Identifier, String)>
where
    S: CategoryNameSource + ?Sized,
{
    category_ids
        .iter()
        .map(|category_id| {
            let name = display_name_or_fallback(source, owner_id, category_id);
            (category_id.clone(), name)
        })
        .collect()
}

fn display_name_or_fallback<S>(
    source: &S,
    owner_id: &Identifier,
    category_id: &Identifier,
) -> String
where
    S: CategoryNameSource + ?Sized,
{
    match source.category_name(owner_id.as_str(), category_id.as_str()) {
        Ok(name) if !name.trim().is_empty() => name,
        Ok(_) => {
            tracing::error!(
                "category {category_id} resolved to a blank name, using the raw id"
            );
            category_id.as_str().to_owned()
        }
        Err(error) => {
            tracing::error!("could not resolve a name for category {category_id}: {error}");
            category_id.as_str().to_owned()
        }
    }
}
