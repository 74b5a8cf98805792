// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

//! Pure transformations between fetching and submitting: flattening series into rows, and
//! partitioning rows into chunks.

pub mod chunk;
pub mod flatten;
