//! The `MetricStats` record summarising spending for a category and period.

use serde::{Deserialize, Serialize};

/// Aggregate spending statistics for one category metric period.
///
/// All fields are finite numbers, defaulting to zero when the backend's
/// value was missing or unparseable. Unlike the other canonical records,
/// "no usable data" yields [MetricStats::ZERO] rather than nothing; callers
/// of the metrics endpoints rely on always getting a record back.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    /// The total amount spent in the period.
    pub total_amount: f64,
    /// How many transactions the period covers.
    pub transaction_count: f64,
    /// The average amount spent per day.
    pub average_per_day: f64,
    /// How many days the period spans.
    pub days: f64,
}

impl MetricStats {
    /// The record returned when no entry of a metrics response normalizes.
    pub const ZERO: Self = Self {
        total_amount: 0.0,
        transaction_count: 0.0,
        average_per_day: 0.0,
        days: 0.0,
    };
}

impl Default for MetricStats {
    fn default() -> Self {
        Self::ZERO
    }
}
