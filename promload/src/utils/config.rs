// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use std::env;
use std::num::NonZeroUsize;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::metric::constants::DEFAULT_CHUNK_SIZE;

const DEFAULT_CONFIG_FILE_NAME: &str = "default.toml";

#[derive(Debug, Deserialize)]
/// Tunables for an export run.
pub struct ExportSettings {
  chunk_size: NonZeroUsize,
  query_timeout_seconds: u64,
  submit_timeout_seconds: u64,
}

impl ExportSettings {
  /// Get the maximum number of rows sent to the sink in one insert call.
  pub fn get_chunk_size(&self) -> NonZeroUsize {
    self.chunk_size
  }

  /// Get the deadline for a single range query.
  pub fn get_query_timeout(&self) -> Duration {
    Duration::from_secs(self.query_timeout_seconds)
  }

  /// Get the deadline for a single chunk submission.
  pub fn get_submit_timeout(&self) -> Duration {
    Duration::from_secs(self.submit_timeout_seconds)
  }
}

#[derive(Debug, Deserialize)]
/// Settings for the exporter, read from config file.
pub struct Settings {
  export: ExportSettings,
}

impl Settings {
  /// Create Settings from given configuration directory path.
  pub fn new(config_dir_path: &str) -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    let config_default_file_name = format!("{}/{}", config_dir_path, DEFAULT_CONFIG_FILE_NAME);
    let config_environment_file_name = format!("{}/{}.toml", config_dir_path, run_mode);

    let config = Config::builder()
      .set_default("export.chunk_size", DEFAULT_CHUNK_SIZE as u64)?
      // Start off by merging in the "default" configuration file
      .add_source(File::with_name(&config_default_file_name))
      // Add in the current environment file
      // Default to 'development' env
      // Note that this file is _optional_
      .add_source(File::with_name(&config_environment_file_name).required(false))
      // Add in settings from the environment (with a prefix of PROM2BQ)
      // Eg.. `PROM2BQ_EXPORT__CHUNK_SIZE=500` would set the `export.chunk_size` key
      .add_source(
        Environment::with_prefix("prom2bq")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }

  /// Get export settings.
  pub fn get_export_settings(&self) -> &ExportSettings {
    &self.export
  }
}
