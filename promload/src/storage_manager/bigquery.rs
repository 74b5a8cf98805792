// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use google_cloud_bigquery::client::google_cloud_auth::credentials::CredentialsFile;
use google_cloud_bigquery::client::{Client, ClientConfig};
use google_cloud_bigquery::http::tabledata::insert_all::{InsertAllRequest, Row};
use log::{debug, info};
use serde_json::Value;
use uuid::Uuid;

use crate::metric::flat_row::FlatRow;
use crate::storage_manager::sink::RowSink;
use crate::storage_manager::table_reference::TableReference;
use crate::utils::error::ExportError;

/// Build a streaming insert request for the given rows. Every row gets a random insert id, which
/// BigQuery uses for best-effort de-duplication of retried inserts.
pub(crate) fn build_insert_request(
  rows: &[FlatRow],
) -> Result<InsertAllRequest<Value>, ExportError> {
  let mut request_rows = Vec::with_capacity(rows.len());
  for row in rows {
    let json = serde_json::to_value(row)
      .map_err(|err| ExportError::SubmitFailure(format!("Could not serialize row: {}", err)))?;
    request_rows.push(Row {
      insert_id: Some(Uuid::new_v4().to_string()),
      json,
    });
  }

  Ok(InsertAllRequest {
    rows: request_rows,
    ..Default::default()
  })
}

/// Inserts rows in a BigQuery table with the `tabledata.insertAll` API.
pub struct BigQuerySink {
  client: Client,
  table: TableReference,
  timeout: Duration,
}

impl BigQuerySink {
  /// Create a sink for the given table, authenticating with a service account credential file.
  /// Every insert call is bounded by the given timeout.
  pub async fn new(
    credential_file: &Path,
    table: TableReference,
    timeout: Duration,
  ) -> Result<Self, ExportError> {
    let credentials = CredentialsFile::new_from_file(credential_file.display().to_string())
      .await
      .map_err(|err| {
        ExportError::InvalidConfiguration(format!(
          "Could not read credential file {}: {}",
          credential_file.display(),
          err
        ))
      })?;

    let (config, _) = ClientConfig::new_with_credentials(credentials)
      .await
      .map_err(|err| ExportError::InvalidConfiguration(err.to_string()))?;

    let client = Client::new(config)
      .await
      .map_err(|err| ExportError::InvalidConfiguration(err.to_string()))?;

    info!("Created BigQuery client for table {}", table);

    Ok(BigQuerySink {
      client,
      table,
      timeout,
    })
  }
}

#[async_trait]
impl RowSink for BigQuerySink {
  async fn submit(&self, rows: &[FlatRow]) -> Result<(), ExportError> {
    if rows.is_empty() {
      debug!("No rows to insert in {}, skipping", self.table);
      return Ok(());
    }

    let request = build_insert_request(rows)?;
    let insert = self.client.tabledata().insert(
      self.table.get_project_id(),
      self.table.get_dataset_id(),
      self.table.get_table_id(),
      &request,
    );

    let response = match tokio::time::timeout(self.timeout, insert).await {
      Ok(result) => result.map_err(|err| ExportError::SubmitFailure(err.to_string()))?,
      Err(_) => {
        return Err(ExportError::SubmitFailure(format!(
          "Insert into {} timed out after {:?}",
          self.table, self.timeout
        )))
      }
    };

    if let Some(insert_errors) = response.insert_errors {
      if !insert_errors.is_empty() {
        return Err(ExportError::SubmitFailure(format!(
          "{} of {} rows were rejected by {}",
          insert_errors.len(),
          rows.len(),
          self.table
        )));
      }
    }

    debug!("Inserted {} rows in {}", rows.len(), self.table);
    Ok(())
  }
}
