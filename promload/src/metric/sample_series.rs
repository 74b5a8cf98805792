// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use serde::{Deserialize, Serialize};

use crate::metric::constants::METRIC_NAME_LABEL;
use crate::metric::metric_point::MetricPoint;

/// A label name and value attached to a time series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Label {
  pub name: String,
  pub value: String,
}

impl Label {
  pub fn new(name: &str, value: &str) -> Self {
    Label {
      name: name.to_owned(),
      value: value.to_owned(),
    }
  }
}

/// One time series returned by a range query: the metric name, the remaining labels and the
/// samples within the query window.
///
/// The metric name is held separately from the labels: [`SampleSeries::new`] moves the
/// `__name__` label into `name`, so `labels` never contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
  name: String,
  labels: Vec<Label>,
  points: Vec<MetricPoint>,
}

impl SampleSeries {
  /// Create a series from the labels reported by the backend, in the order they were reported.
  /// A missing name label results in an empty metric name.
  pub fn new(labels: Vec<Label>, points: Vec<MetricPoint>) -> Self {
    let mut name = String::new();
    let mut other_labels = Vec::with_capacity(labels.len());
    for label in labels {
      if label.name == METRIC_NAME_LABEL {
        name = label.value;
      } else {
        other_labels.push(label);
      }
    }

    SampleSeries {
      name,
      labels: other_labels,
      points,
    }
  }

  /// Get the metric name of this series.
  pub fn get_name(&self) -> &str {
    &self.name
  }

  /// Get the labels of this series, excluding the metric name.
  pub fn get_labels(&self) -> &[Label] {
    &self.labels
  }

  pub fn get_points(&self) -> &[MetricPoint] {
    &self.points
  }

  pub fn into_parts(self) -> (String, Vec<Label>, Vec<MetricPoint>) {
    (self.name, self.labels, self.points)
  }
}
