//! Normalization of category metric statistics responses.

use serde_json::{Map, Value};

use crate::{
    models::MetricStats,
    normalize::{NormalizeContext, pick},
    report::{RawResponseSink, is_recognized_empty, log_unrecognized_shape},
    resolve::resolve_number,
    unwrap::unwrap_entries,
};

const TOTAL_FIELDS: [&str; 3] = ["total_amount", "total", "amount"];
const COUNT_FIELDS: [&str; 3] = ["transaction_count", "count", "tx_count"];
const AVERAGE_FIELDS: [&str; 3] = ["average_per_day", "avg_per_day", "average"];
const DAYS_FIELDS: [&str; 3] = ["days", "day_count", "num_days"];

/// Normalize a metrics response into [MetricStats] records.
///
/// The returned sequence is never empty: when no entry of the response
/// normalizes, it holds a single [MetricStats::ZERO]. Callers of the
/// metrics endpoints rely on always getting a record back, so a total
/// failure degrades to a zero-valued record rather than an empty sequence.
///
/// When `sink` is given it receives the raw payload before any unwrapping,
/// so tooling can inspect exactly what the backend sent. The sink never
/// influences the normalized output.
pub fn normalize_metric_stats(
    raw: &Value,
    context: &NormalizeContext,
    sink: Option<&dyn RawResponseSink>,
) -> Vec<MetricStats> {
    if let Some(sink) = sink {
        sink.capture(raw);
    }

    let stats: Vec<MetricStats> = unwrap_entries(raw)
        .into_iter()
        .map(normalize_stats_entry)
        .collect();

    if stats.is_empty() {
        if !is_recognized_empty(raw) {
            log_unrecognized_shape(context.endpoint, raw);
        }
        return vec![MetricStats::ZERO];
    }

    stats
}

fn normalize_stats_entry(entry: &Map<String, Value>) -> MetricStats {
    MetricStats {
        total_amount: resolve_field(entry, &TOTAL_FIELDS),
        transaction_count: resolve_field(entry, &COUNT_FIELDS),
        average_per_day: resolve_field(entry, &AVERAGE_FIELDS),
        days: resolve_field(entry, &DAYS_FIELDS),
    }
}

fn resolve_field(entry: &Map<String, Value>, fields: &[&str]) -> f64 {
    pick(entry, fields)
        .map(|value| resolve_number(value, 0.0))
        .unwrap_or(0.0)
}
