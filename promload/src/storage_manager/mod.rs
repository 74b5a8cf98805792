// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

//! Write exported rows to the analytical store.

pub mod bigquery;
pub mod sink;
pub mod table_reference;
