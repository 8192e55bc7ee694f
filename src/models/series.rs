//! Time-series response models.

use serde::{Deserialize, Serialize};

use crate::metrics::TimeSeriesMetric;

/// One dated sample from a time-series response.
///
/// Values arrive as strings on the wire regardless of metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// Sample date (`YYYY-MM-DD`)
    pub date_time: String,
    pub value: String,
}

/// Parsed time-series payload for one metric.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub metric: TimeSeriesMetric,
    /// Samples in upstream order (oldest first)
    pub points: Vec<TimeSeriesPoint>,
}
