// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

/// The reserved label that carries the metric name of a series. For example, the series
/// `request_count{method="GET"}` is reported with the labels `__name__="request_count"` and
/// `method="GET"`.
pub const METRIC_NAME_LABEL: &str = "__name__";

/// Default number of rows sent to the sink in a single insert call.
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;

pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;
