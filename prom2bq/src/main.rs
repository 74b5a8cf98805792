// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

//! prom2bq exports Prometheus metrics to BigQuery.
//!
//! Every metric named on the command line is read from Prometheus over the given time range
//! and inserted in the given table, one row per sample. Metrics are exported one after the
//! other; the first error stops the run and the process exits with a non-zero status.
//!
//! Tunables such as the chunk size are read from `default.toml` in the directory named by
//! `PROM2BQ_CONFIG_DIR_PATH` (defaults to `config`).

mod utils;

use std::env;
use std::process;

use log::info;
use promload::utils::config::Settings;
use promload::utils::environment::load_env;
use promload::{BigQuerySink, ExportSummary, Exporter, PrometheusClient};

use crate::utils::cli::{get_run_config, parse_args};
use crate::utils::error::Prom2BqError;

async fn run() -> Result<ExportSummary, Prom2BqError> {
  let matches = parse_args(env::args_os())?;
  let run_config = get_run_config(&matches)?;
  info!("Configuration: {:?}", run_config);

  // Config directory path is relative to the current directory, and set in environment variable "PROM2BQ_CONFIG_DIR_PATH".
  // Defaults to "config" if not set.
  let config_dir_path =
    env::var("PROM2BQ_CONFIG_DIR_PATH").unwrap_or_else(|_| "config".to_owned());
  let settings =
    Settings::new(&config_dir_path).map_err(|err| Prom2BqError::Settings(err.to_string()))?;
  let export_settings = settings.get_export_settings();

  let querier = PrometheusClient::new(
    run_config.get_prometheus_address(),
    export_settings.get_query_timeout(),
  )?;
  let sink = BigQuerySink::new(
    run_config.get_credential_file(),
    run_config.get_table().clone(),
    export_settings.get_submit_timeout(),
  )
  .await?;

  let exporter = Exporter::new(querier, sink, export_settings.get_chunk_size());
  Ok(exporter.run(&run_config).await?)
}

/// Program entry point.
fn main() {
  // Load environment variables from ".env" and ".env-creds" file.
  load_env();

  // If log level isn't set, set it to info.
  if env::var("RUST_LOG").is_err() {
    env::set_var("RUST_LOG", "info")
  }
  env_logger::init();

  // Everything runs sequentially, so a single thread is enough.
  let runtime = match tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
  {
    Ok(runtime) => runtime,
    Err(err) => {
      eprintln!("error: could not start runtime: {}", err);
      process::exit(1);
    }
  };

  match runtime.block_on(run()) {
    Ok(summary) => {
      info!(
        "Exported {} metrics: {} rows in {} chunks",
        summary.metrics, summary.rows, summary.chunks
      );
    }
    Err(err) => {
      eprintln!("error: {}", err);
      process::exit(1);
    }
  }
}
