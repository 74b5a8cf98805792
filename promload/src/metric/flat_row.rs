// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully denormalized sample, ready to be inserted in a table.
///
/// The serialized column names match the table layout used by earlier loads:
/// `Time`, `Name`, `Value` and `Labels`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FlatRow {
  #[serde(rename = "Time")]
  time: DateTime<Utc>,

  #[serde(rename = "Name")]
  name: String,

  #[serde(rename = "Value")]
  value: f64,

  /// Labels formatted as `key="value"`.
  #[serde(rename = "Labels")]
  labels: Vec<String>,
}

impl FlatRow {
  pub fn new(time: DateTime<Utc>, name: &str, value: f64, labels: Vec<String>) -> Self {
    FlatRow {
      time,
      name: name.to_owned(),
      value,
      labels,
    }
  }

  pub fn get_time(&self) -> DateTime<Utc> {
    self.time
  }

  pub fn get_name(&self) -> &str {
    &self.name
  }

  pub fn get_value(&self) -> f64 {
    self.value
  }

  pub fn get_labels(&self) -> &[String] {
    &self.labels
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use chrono::TimeZone;
  use serde_json::json;

  #[test]
  fn test_serialized_columns() {
    let time = Utc.timestamp_opt(1, 500_000_000).unwrap();
    let row = FlatRow::new(time, "cpu", 0.5, vec!["host=\"a\"".to_owned()]);

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(
      value,
      json!({
        "Time": "1970-01-01T00:00:01.500Z",
        "Name": "cpu",
        "Value": 0.5,
        "Labels": ["host=\"a\""],
      })
    );
  }
}
