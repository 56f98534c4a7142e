//! Scalar resolvers that extract one canonical value from an arbitrarily
//! shaped dynamic JSON value.
//!
//! The backend has renamed fields and changed encodings several times
//! (`owner_id` vs `user_id`, ISO date strings vs epoch numbers vs
//! `{$date: ...}`, MongoDB extended-JSON number wrappers). Each resolver is a
//! total function: it applies a fixed, ordered list of extraction strategies
//! and returns the first success. Absence is the only failure signal; none of
//! these functions panic or return an error.

use serde_json::Value;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::well_known::{Iso8601, Rfc3339},
};

use crate::identifier::Identifier;

/// Object keys probed, in priority order, when an identifier arrives wrapped
/// in a map instead of as a bare scalar.
const ID_KEYS: [&str; 12] = [
    "$oid",
    "id",
    "_id",
    "value",
    "tx_id",
    "txId",
    "category_id",
    "categoryId",
    "user_id",
    "userId",
    "owner_id",
    "ownerId",
];

/// Object keys probed when a display string arrives wrapped in a map.
const NAME_KEYS: [&str; 3] = ["name", "label", "value"];

/// Extended-JSON number wrapper keys, most specific first.
const NUMBER_KEYS: [&str; 6] = [
    "$numberDecimal",
    "$numberDouble",
    "$numberInt",
    "$numberLong",
    "value",
    "amount",
];

/// Object keys probed when a date arrives wrapped in a map.
const DATE_KEYS: [&str; 4] = ["date", "$date", "value", "timestamp"];

/// Resolve an identifier token from a dynamic value.
///
/// Resolution order, first match wins:
/// 1. A string that is non-blank after trimming is returned untrimmed.
/// 2. A number is returned in its canonical decimal string form.
/// 3. An object is probed for the known identifier-bearing keys (`$oid`,
///    `id`, `_id`, ...), recursing into the first candidate that itself
///    resolves.
///
/// Booleans, arrays, and objects without a resolvable candidate key have no
/// meaningful string form and resolve to `None`, as do `null` and the empty
/// string.
pub fn resolve_id(value: &Value) -> Option<Identifier> {
    match value {
        Value::String(text) => Identifier::new(text),
        Value::Number(number) => Some(Identifier::new_unchecked(number.to_string())),
        Value::Object(map) => ID_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(resolve_id),
        _ => None,
    }
}

/// Resolve a display string from a dynamic value.
///
/// Strings pass through when non-blank, numbers convert to their decimal
/// form, arrays yield the earliest element that resolves, and objects are
/// probed for `name`, `label`, then `value`, recursing so doubly-wrapped
/// names still resolve.
pub fn resolve_name(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            if text.trim().is_empty() {
                None
            } else {
                Some(text.clone())
            }
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Array(items) => items.iter().find_map(resolve_name),
        Value::Object(map) => NAME_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(resolve_name),
        _ => None,
    }
}

/// Resolve a finite number from a dynamic value, returning `fallback` when
/// no strategy yields one.
///
/// Handles bare numbers, numeric strings, MongoDB extended-JSON wrappers
/// such as `{$numberDecimal: "10.5"}`, and arrays (first finite element
/// wins). `NaN` and infinities are treated as unresolved, so this function
/// never returns a non-finite number unless the caller passes one as the
/// fallback.
pub fn resolve_number(value: &Value, fallback: f64) -> f64 {
    resolve_finite(value).unwrap_or(fallback)
}

/// The strategy chain behind [resolve_number], with absence made explicit so
/// wrapper probes can continue past candidates that resolve to a non-finite
/// value.
fn resolve_finite(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|parsed| parsed.is_finite()),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|parsed| parsed.is_finite())
        }
        Value::Object(map) => NUMBER_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(resolve_finite),
        Value::Array(items) => items.iter().find_map(resolve_finite),
        _ => None,
    }
}

/// Resolve an instant from a dynamic value.
///
/// Strings are trimmed and parsed as RFC-3339, ISO-8601 (with or without an
/// offset), or a bare calendar date taken as midnight UTC. Numbers are
/// interpreted as milliseconds since the Unix epoch. Objects are probed for
/// `date`, `$date`, `value`, then `timestamp`, recursing into the first
/// candidate that resolves.
pub fn resolve_date(value: &Value) -> Option<OffsetDateTime> {
    match value {
        Value::String(text) => parse_date_text(text.trim()),
        Value::Number(number) => {
            let milliseconds = number.as_f64().filter(|parsed| parsed.is_finite())?;
            OffsetDateTime::from_unix_timestamp_nanos((milliseconds * 1e6) as i128).ok()
        }
        Value::Object(map) => DATE_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(resolve_date),
        _ => None,
    }
}

/// Resolve a date as a display string.
///
/// A string input that parses as a date passes through verbatim, preserving
/// whatever format the backend sent; any other resolvable date is formatted
/// as RFC-3339; everything else yields the empty string.
pub fn resolve_date_string(value: &Value) -> String {
    if let Value::String(text) = value
        && parse_date_text(text.trim()).is_some()
    {
        return text.clone();
    }

    resolve_date(value)
        .and_then(|instant| instant.format(&Rfc3339).ok())
        .unwrap_or_default()
}

fn parse_date_text(text: &str) -> Option<OffsetDateTime> {
    if text.is_empty() {
        return None;
    }

    OffsetDateTime::parse(text, &Rfc3339)
        .ok()
        .or_else(|| OffsetDateTime::parse(text, &Iso8601::DEFAULT).ok())
        .or_else(|| {
            PrimitiveDateTime::parse(text, &Iso8601::DEFAULT)
                .ok()
                .map(PrimitiveDateTime::assume_utc)
        })
        .or_else(|| {
            Date::parse(text, &Iso8601::DEFAULT)
                .ok()
                .map(|date| date.midnight().assume_utc())
        })
}

#[cfg(test)]
mod resolve_id_tests {
    use serde_json::json;

    use super::resolve_id;
    use crate::identifier::Identifier;

    #[test]
    fn null_resolves_to_absence() {
        assert_eq!(resolve_id(&json!(null)), None);
    }

    #[test]
    fn empty_string_resolves_to_absence() {
        assert_eq!(resolve_id(&json!("")), None);
        assert_eq!(resolve_id(&json!("   ")), None);
    }

    #[test]
    fn string_passes_through_untrimmed() {
        assert_eq!(
            resolve_id(&json!(" abc-123 ")),
            Some(Identifier::new_unchecked(" abc-123 "))
        );
    }

    #[test]
    fn number_converts_to_decimal_string() {
        assert_eq!(resolve_id(&json!(42)), Some(Identifier::new_unchecked("42")));
        assert_eq!(
            resolve_id(&json!(-7.5)),
            Some(Identifier::new_unchecked("-7.5"))
        );
    }

    #[test]
    fn oid_wrapper_wins_over_other_keys() {
        let value = json!({"id": "plain", "$oid": "65f0c0ffee"});

        assert_eq!(
            resolve_id(&value),
            Some(Identifier::new_unchecked("65f0c0ffee"))
        );
    }

    #[test]
    fn probe_recurses_through_nested_wrappers() {
        let value = json!({"value": {"value": "deep-id"}});

        assert_eq!(resolve_id(&value), Some(Identifier::new_unchecked("deep-id")));
    }

    #[test]
    fn probe_skips_unresolvable_candidates() {
        let value = json!({"id": null, "_id": "", "tx_id": "t9"});

        assert_eq!(resolve_id(&value), Some(Identifier::new_unchecked("t9")));
    }

    #[test]
    fn booleans_and_arrays_resolve_to_absence() {
        assert_eq!(resolve_id(&json!(true)), None);
        assert_eq!(resolve_id(&json!(["t1"])), None);
    }

    #[test]
    fn object_without_candidates_resolves_to_absence() {
        assert_eq!(resolve_id(&json!({"merchant": "CAFE"})), None);
    }
}


#[cfg(test)]
mod resolve_number_tests {
    use serde_json::json;

    use super::resolve_number;

    #[test]
    fn finite_number_passes_through() {
        assert_eq!(resolve_number(&json!(42.5), 0.0), 42.5);
        assert_eq!(resolve_number(&json!(-3), 0.0), -3.0);
    }

    #[test]
    fn numeric_string_parses() {
        assert_eq!(resolve_number(&json!("  42.50 "), 0.0), 42.5);
    }

    #[test]
    fn unparseable_inputs_fall_back() {
        assert_eq!(resolve_number(&json!("abc"), 7.0), 7.0);
        assert_eq!(resolve_number(&json!({}), 7.0), 7.0);
        assert_eq!(resolve_number(&json!([]), 7.0), 7.0);
        assert_eq!(resolve_number(&json!(null), 7.0), 7.0);
    }

    #[test]
    fn non_finite_string_parse_falls_back() {
        assert_eq!(resolve_number(&json!("inf"), 0.0), 0.0);
        assert_eq!(resolve_number(&json!("NaN"), 0.0), 0.0);
    }

    #[test]
    fn extended_json_wrappers_resolve() {
        assert_eq!(resolve_number(&json!({"$numberDecimal": "10.5"}), 0.0), 10.5);
        assert_eq!(resolve_number(&json!({"$numberLong": "12"}), 0.0), 12.0);
    }

    #[test]
    fn probe_continues_past_non_finite_wrapper() {
        let value = json!({"$numberDecimal": "not a number", "value": 3.25});

        assert_eq!(resolve_number(&value, 0.0), 3.25);
    }

    #[test]
    fn first_finite_array_element_wins() {
        assert_eq!(resolve_number(&json!(["x", "2.5", 9]), 0.0), 2.5);
    }
}
