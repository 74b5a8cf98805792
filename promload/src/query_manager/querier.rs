// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::metric::sample_series::SampleSeries;
use crate::utils::error::ExportError;

/// The data section of an instant query response, by result type.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
  /// Range vector: a list of series with several samples each.
  Matrix(Vec<SampleSeries>),
  /// Instant vector. Its contents are not decoded.
  Vector,
  Scalar,
  String,
}

impl QueryResult {
  /// Get the result type name as reported by Prometheus.
  pub fn result_type(&self) -> &'static str {
    match self {
      QueryResult::Matrix(_) => "matrix",
      QueryResult::Vector => "vector",
      QueryResult::Scalar => "scalar",
      QueryResult::String => "string",
    }
  }
}

/// A successful response from the metrics backend.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
  pub result: QueryResult,
  /// Warnings reported alongside the result, e.g. when some data could not be read.
  pub warnings: Vec<String>,
}

impl QueryResponse {
  pub fn new(result: QueryResult, warnings: Vec<String>) -> Self {
    QueryResponse { result, warnings }
  }
}

/// Querier wraps the instant query API of a metrics backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsQuerier: Send + Sync {
  /// Evaluate the given query at the given instant. Transport and backend errors are
  /// reported as FetchFailure.
  async fn query(&self, query: &str, time: DateTime<Utc>) -> Result<QueryResponse, ExportError>;
}
