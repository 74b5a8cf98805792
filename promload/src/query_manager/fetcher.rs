// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use log::debug;

use crate::metric::sample_series::SampleSeries;
use crate::query_manager::querier::{MetricsQuerier, QueryResult};
use crate::query_manager::query_window::QueryWindow;
use crate::utils::error::ExportError;

/// Build the range selector covering `seconds` seconds back from the evaluation instant.
pub fn range_query(metric: &str, seconds: i64) -> String {
  format!("{}[{}s]", metric, seconds)
}

/// Fetches all samples of a metric within a window, with a single range query.
#[derive(Debug)]
pub struct RangeFetcher<Q: MetricsQuerier> {
  querier: Q,
}

impl<Q: MetricsQuerier> RangeFetcher<Q> {
  pub fn new(querier: Q) -> Self {
    RangeFetcher { querier }
  }

  /// Fetch every series of the given metric with samples in [end - duration, end].
  ///
  /// Fails without contacting the backend if the window is inverted. Backend warnings fail the
  /// fetch, since they may mean the data is incomplete.
  pub async fn fetch(
    &self,
    metric: &str,
    window: &QueryWindow,
  ) -> Result<Vec<SampleSeries>, ExportError> {
    let seconds = window.duration_seconds()?;
    let query = range_query(metric, seconds);

    debug!("Running query {} at {}", query, window.get_end());
    let response = self.querier.query(&query, window.get_end()).await?;

    if !response.warnings.is_empty() {
      return Err(ExportError::BackendWarning(query, response.warnings));
    }

    match response.result {
      QueryResult::Matrix(series) => Ok(series),
      other => Err(ExportError::MalformedResult(format!(
        "Expected a matrix for query {}, received {}",
        query,
        other.result_type()
      ))),
    }
  }
}
