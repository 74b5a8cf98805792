// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use std::fmt;
use std::str::FromStr;

use crate::utils::error::ExportError;

/// Fully qualified destination table, written as `project:dataset.table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReference {
  project_id: String,
  dataset_id: String,
  table_id: String,
}

impl TableReference {
  pub fn new(project_id: &str, dataset_id: &str, table_id: &str) -> Self {
    TableReference {
      project_id: project_id.to_owned(),
      dataset_id: dataset_id.to_owned(),
      table_id: table_id.to_owned(),
    }
  }

  pub fn get_project_id(&self) -> &str {
    &self.project_id
  }

  pub fn get_dataset_id(&self) -> &str {
    &self.dataset_id
  }

  pub fn get_table_id(&self) -> &str {
    &self.table_id
  }
}

impl FromStr for TableReference {
  type Err = ExportError;

  /// Parse `project:dataset.table`. There must be exactly one `:` followed by exactly one `.`,
  /// and no part may be empty.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || {
      ExportError::InvalidConfiguration(format!(
        "Invalid table {:?}, expected project:dataset.table",
        s
      ))
    };

    let (project_id, rest) = s.split_once(':').ok_or_else(invalid)?;
    let (dataset_id, table_id) = rest.split_once('.').ok_or_else(invalid)?;

    let parts = [project_id, dataset_id, table_id];
    if parts
      .iter()
      .any(|part| part.is_empty() || part.contains(':') || part.contains('.'))
    {
      return Err(invalid());
    }

    Ok(TableReference::new(project_id, dataset_id, table_id))
  }
}

impl fmt::Display for TableReference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}.{}", self.project_id, self.dataset_id, self.table_id)
  }
}
