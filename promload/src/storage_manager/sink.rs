// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use async_trait::async_trait;

use crate::metric::flat_row::FlatRow;
use crate::utils::error::ExportError;

/// Destination of exported rows.
///
/// Retries and de-duplication are up to the implementation. Submitting an empty slice must
/// succeed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RowSink: Send + Sync {
  /// Insert the given rows. Any error is reported as SubmitFailure.
  async fn submit(&self, rows: &[FlatRow]) -> Result<(), ExportError>;
}
