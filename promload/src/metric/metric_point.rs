// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use approx::abs_diff_eq;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::ms_epoch_to_datetime;

/// Represents a single sample of a time series, as reported by the metrics backend.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MetricPoint {
  /// Milliseconds since epoch.
  timestamp_ms: i64,

  /// Value for this metric point.
  value: f64,
}

impl MetricPoint {
  /// Create a new MetricPoint from given millisecond timestamp and value.
  pub fn new(timestamp_ms: i64, value: f64) -> Self {
    MetricPoint {
      timestamp_ms,
      value,
    }
  }

  /// Get the timestamp in milliseconds since epoch.
  pub fn get_timestamp_ms(&self) -> i64 {
    self.timestamp_ms
  }

  /// Get value.
  pub fn get_value(&self) -> f64 {
    self.value
  }

  /// Get the timestamp as a full precision UTC instant.
  pub fn datetime(&self) -> DateTime<Utc> {
    ms_epoch_to_datetime(self.timestamp_ms)
  }
}

impl PartialEq for MetricPoint {
  #[inline]
  fn eq(&self, other: &MetricPoint) -> bool {
    // Two metric points are equal if their times are equal, and their values are either equal or are NaN.
    if self.timestamp_ms == other.timestamp_ms {
      if self.value.is_nan() {
        return other.value.is_nan();
      } else {
        return abs_diff_eq!(self.value, other.value);
      }
    }
    false
  }
}
