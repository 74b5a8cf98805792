// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use std::path::{Path, PathBuf};

use crate::query_manager::query_window::QueryWindow;
use crate::storage_manager::table_reference::TableReference;

/// Everything a single export run needs. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
  window: QueryWindow,
  prometheus_address: String,
  credential_file: PathBuf,
  table: TableReference,
  metrics: Vec<String>,
}

impl RunConfig {
  pub fn new(
    window: QueryWindow,
    prometheus_address: &str,
    credential_file: &Path,
    table: TableReference,
    metrics: Vec<String>,
  ) -> Self {
    RunConfig {
      window,
      prometheus_address: prometheus_address.to_owned(),
      credential_file: credential_file.to_path_buf(),
      table,
      metrics,
    }
  }

  pub fn get_window(&self) -> &QueryWindow {
    &self.window
  }

  pub fn get_prometheus_address(&self) -> &str {
    &self.prometheus_address
  }

  pub fn get_credential_file(&self) -> &Path {
    &self.credential_file
  }

  pub fn get_table(&self) -> &TableReference {
    &self.table
  }

  /// Get the metric names to export, in export order.
  pub fn get_metrics(&self) -> &[String] {
    &self.metrics
  }
}
