// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

//! Export Prometheus samples to a BigQuery table.
//!
//! For every requested metric, the [`Exporter`] runs one range query covering the configured
//! window, flattens each sample into a [row](metric::flat_row::FlatRow), and inserts the rows
//! in fixed-size chunks. Metrics and chunks are processed strictly one after the other; the
//! first error aborts the run, leaving already inserted chunks in place.
//!
//! The metrics backend and the table are reached through the [`MetricsQuerier`] and
//! [`RowSink`] traits, implemented for Prometheus by [`PrometheusClient`] and for BigQuery
//! by [`BigQuerySink`].

pub mod metric;
pub mod query_manager;
pub mod run_config;
pub mod storage_manager;
pub mod transform;
pub mod utils;

use std::num::NonZeroUsize;

use log::{debug, info};

use crate::query_manager::fetcher::RangeFetcher;
use crate::query_manager::query_window::QueryWindow;
use crate::transform::chunk::partition;
use crate::transform::flatten::flatten_series;

pub use crate::query_manager::prometheus::PrometheusClient;
pub use crate::query_manager::querier::MetricsQuerier;
pub use crate::run_config::RunConfig;
pub use crate::storage_manager::bigquery::BigQuerySink;
pub use crate::storage_manager::sink::RowSink;
pub use crate::utils::error::ExportError;

/// Counts for one exported metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricSummary {
  pub rows: usize,
  pub chunks: usize,
}

/// Counts for a completed export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
  pub metrics: usize,
  pub rows: usize,
  pub chunks: usize,
}

/// Runs the fetch, flatten, partition and submit pipeline.
pub struct Exporter<Q: MetricsQuerier, S: RowSink> {
  fetcher: RangeFetcher<Q>,
  sink: S,
  chunk_size: NonZeroUsize,
}

impl<Q: MetricsQuerier, S: RowSink> Exporter<Q, S> {
  pub fn new(querier: Q, sink: S, chunk_size: NonZeroUsize) -> Self {
    Exporter {
      fetcher: RangeFetcher::new(querier),
      sink,
      chunk_size,
    }
  }

  /// Export every metric of the run configuration, in order. Stops at the first failure, which
  /// is returned with the name of the metric being exported.
  pub async fn run(&self, run_config: &RunConfig) -> Result<ExportSummary, ExportError> {
    let window = run_config.get_window();
    let mut summary = ExportSummary::default();

    for metric in run_config.get_metrics() {
      info!(
        "Processing {} from {} to {}",
        metric,
        window.get_start(),
        window.get_end()
      );

      let metric_summary = self
        .export_metric(metric, window)
        .await
        .map_err(|err| err.for_metric(metric))?;

      summary.metrics += 1;
      summary.rows += metric_summary.rows;
      summary.chunks += metric_summary.chunks;
    }

    Ok(summary)
  }

  /// Export a single metric: fetch its samples in the window, flatten them and submit the rows
  /// chunk by chunk.
  pub async fn export_metric(
    &self,
    metric: &str,
    window: &QueryWindow,
  ) -> Result<MetricSummary, ExportError> {
    let series = self.fetcher.fetch(metric, window).await?;
    let rows = flatten_series(series);
    info!("Obtained {} records", rows.len());

    let chunks = partition(&rows, self.chunk_size);
    let num_chunks = chunks.len();
    for (i, chunk) in chunks.into_iter().enumerate() {
      debug!(
        "Submitting chunk {}/{} of {} with {} rows",
        i + 1,
        num_chunks,
        metric,
        chunk.len()
      );
      self.sink.submit(chunk).await?;
    }

    Ok(MetricSummary {
      rows: rows.len(),
      chunks: num_chunks,
    })
  }
}
