// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

//! Fetch raw samples from the metrics backend.

pub mod fetcher;
pub mod prometheus;
pub mod querier;
pub mod query_window;
