// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
/// Enum for the errors that can abort an export run.
pub enum ExportError {
  #[error("Invalid query window. Start {0} is after end {1}.")]
  InvalidWindow(String, String),

  #[error("Query {0} returned warnings: {1:?}")]
  BackendWarning(String, Vec<String>),

  #[error("Malformed query result. {0}")]
  MalformedResult(String),

  #[error("Fetch failure: {0}")]
  FetchFailure(String),

  #[error("Submit failure: {0}")]
  SubmitFailure(String),

  #[error("Invalid configuration. {0}")]
  InvalidConfiguration(String),

  #[error("Export of metric {0} failed. {1}")]
  MetricFailed(String, Box<ExportError>),
}

impl ExportError {
  /// Attach the metric being exported to this error.
  pub fn for_metric(self, metric: &str) -> Self {
    ExportError::MetricFailed(metric.to_owned(), Box::new(self))
  }

  /// Get the underlying error, without the metric context.
  pub fn root_cause(&self) -> &ExportError {
    match self {
      ExportError::MetricFailed(_, cause) => cause.root_cause(),
      _ => self,
    }
  }
}

impl From<reqwest::Error> for ExportError {
  fn from(error: reqwest::Error) -> Self {
    ExportError::FetchFailure(error.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_root_cause() {
    let err = ExportError::SubmitFailure("quota exceeded".to_owned()).for_metric("up");
    assert_eq!(
      err.to_string(),
      "Export of metric up failed. Submit failure: quota exceeded"
    );
    assert_eq!(
      err.root_cause(),
      &ExportError::SubmitFailure("quota exceeded".to_owned())
    );
  }
}
