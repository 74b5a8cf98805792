// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use std::ffi::OsString;
use std::path::Path;

use chrono::{DateTime, Utc};
use clap::error::ErrorKind;
use clap::{arg, Arg, ArgMatches, Command};
use promload::query_manager::query_window::QueryWindow;
use promload::storage_manager::table_reference::TableReference;
use promload::utils::time::parse_rfc3339;
use promload::RunConfig;

use crate::utils::error::Prom2BqError;

/// Command line interface of prom2bq.
pub fn get_command() -> Command {
  Command::new("prom2bq")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Export Prometheus metrics in a time range to a BigQuery table")
    .arg(arg!(--start <VALUE> "Start of the time range, in RFC 3339 format").required(true))
    .arg(arg!(--end <VALUE> "End of the time range, in RFC 3339 format").required(true))
    .arg(arg!(--prometheus <VALUE> "URL of Prometheus").required(true))
    .arg(arg!(--credential <VALUE> "Service account credential file").required(true))
    .arg(arg!(--bigquery <VALUE> "Destination table (project:dataset.table)").required(true))
    .arg(
      Arg::new("metrics")
        .help("Names of the metrics to export")
        .num_args(1..)
        .required(true),
    )
}

/// Parse the given command line. Help and version requests are printed and end the process;
/// any other usage error is returned as `InvalidInput`.
pub fn parse_args<I, T>(args: I) -> Result<ArgMatches, Prom2BqError>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  get_command()
    .try_get_matches_from(args)
    .map_err(|err| match err.kind() {
      ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
      _ => {
        let message = err.to_string();
        Prom2BqError::InvalidInput(message.trim_start_matches("error: ").trim_end().to_owned())
      }
    })
}

fn get_required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str, Prom2BqError> {
  matches
    .get_one::<String>(id)
    .map(String::as_str)
    .ok_or_else(|| Prom2BqError::InvalidInput(format!("{} option is required", id)))
}

/// Build the run configuration from parsed command line arguments.
pub fn get_run_config(matches: &ArgMatches) -> Result<RunConfig, Prom2BqError> {
  let parse_time = |id: &str| -> Result<DateTime<Utc>, Prom2BqError> {
    let value = get_required(matches, id)?;
    parse_rfc3339(value).map_err(|err| {
      Prom2BqError::InvalidInput(format!("Invalid {} time {:?}: {}", id, value, err))
    })
  };
  let start = parse_time("start")?;
  let end = parse_time("end")?;

  let table: TableReference = get_required(matches, "bigquery")?.parse()?;

  let metrics: Vec<String> = matches
    .get_many::<String>("metrics")
    .map(|values| values.cloned().collect())
    .unwrap_or_default();
  if metrics.is_empty() {
    return Err(Prom2BqError::InvalidInput(
      "At least one metric is required".to_owned(),
    ));
  }

  Ok(RunConfig::new(
    QueryWindow::new(start, end),
    get_required(matches, "prometheus")?,
    Path::new(get_required(matches, "credential")?),
    table,
    metrics,
  ))
}
