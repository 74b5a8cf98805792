// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use chrono::{DateTime, ParseError, Utc};
use log::warn;

use crate::metric::constants::{MILLIS_PER_SECOND, NANOS_PER_MILLI};

/// Converts a millisecond epoch timestamp to a full precision UTC instant:
/// 1500 ms is 1 second and 500,000,000 nanoseconds past epoch.
pub fn ms_epoch_to_datetime(ms: i64) -> DateTime<Utc> {
  let secs = ms.div_euclid(MILLIS_PER_SECOND);
  let nanos = (ms.rem_euclid(MILLIS_PER_SECOND) * NANOS_PER_MILLI) as u32;

  match DateTime::from_timestamp(secs, nanos) {
    Some(datetime) => datetime,
    None => {
      // Only reachable for timestamps hundreds of thousands of years away from epoch.
      warn!("Timestamp {} ms is out of range, clamping", ms);
      if ms < 0 {
        DateTime::<Utc>::MIN_UTC
      } else {
        DateTime::<Utc>::MAX_UTC
      }
    }
  }
}

/// Converts a UTC instant to seconds since epoch, keeping millisecond precision.
pub fn datetime_to_epoch_seconds(datetime: &DateTime<Utc>) -> f64 {
  datetime.timestamp_millis() as f64 / MILLIS_PER_SECOND as f64
}

/// Parses an RFC 3339 timestamp such as `2024-01-01T00:00:00Z` or `2024-01-01T05:30:00+05:30`.
pub fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>, ParseError> {
  DateTime::parse_from_rfc3339(s).map(|datetime| datetime.with_timezone(&Utc))
}
