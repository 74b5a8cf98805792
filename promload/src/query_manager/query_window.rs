// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use chrono::{DateTime, Utc};

use crate::utils::error::ExportError;

/// The time range exported for every metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
  start: DateTime<Utc>,
  end: DateTime<Utc>,
}

impl QueryWindow {
  /// Create a window. The ordering of start and end is checked when the window is used.
  pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
    QueryWindow { start, end }
  }

  pub fn get_start(&self) -> DateTime<Utc> {
    self.start
  }

  pub fn get_end(&self) -> DateTime<Utc> {
    self.end
  }

  /// Get the length of the window in whole seconds, truncating any fraction.
  /// Fails with InvalidWindow if start is after end.
  pub fn duration_seconds(&self) -> Result<i64, ExportError> {
    if self.start > self.end {
      return Err(ExportError::InvalidWindow(
        self.start.to_rfc3339(),
        self.end.to_rfc3339(),
      ));
    }

    Ok((self.end - self.start).num_seconds())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use chrono::Duration;

  use crate::utils::time::parse_rfc3339;

  #[test]
  fn test_duration_seconds() {
    let start = parse_rfc3339("2024-01-01T00:00:00Z").unwrap();

    let window = QueryWindow::new(start, start + Duration::hours(1));
    assert_eq!(window.duration_seconds(), Ok(3600));

    let window = QueryWindow::new(start, start);
    assert_eq!(window.duration_seconds(), Ok(0));

    // Fractional seconds are truncated.
    let window = QueryWindow::new(start, start + Duration::milliseconds(2999));
    assert_eq!(window.duration_seconds(), Ok(2));
  }

  #[test]
  fn test_start_after_end() {
    let end = parse_rfc3339("2024-01-01T00:00:00Z").unwrap();

    let window = QueryWindow::new(end + Duration::seconds(10), end);
    assert!(matches!(
      window.duration_seconds(),
      Err(ExportError::InvalidWindow(_, _))
    ));

    // Even a sub-second inversion is rejected.
    let window = QueryWindow::new(end + Duration::milliseconds(1), end);
    assert!(window.duration_seconds().is_err());
  }
}
