// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use promload::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Collection of error messages in prom2bq.
pub enum Prom2BqError {
  #[error("Invalid input. {0}")]
  InvalidInput(String),

  #[error("Could not read settings. {0}")]
  Settings(String),

  #[error("{0}")]
  Export(#[from] ExportError),
}
