// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

//! Utilities shared by the export pipeline.

pub mod config;
pub mod environment;
pub mod error;
pub mod time;
