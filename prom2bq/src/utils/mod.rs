// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

//! Utilities for the prom2bq command line application.

pub(crate) mod cli;
pub(crate) mod error;
