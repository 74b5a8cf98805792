// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

//! Data model for exported metrics.
//!
//! A range query returns [sample series](sample_series::SampleSeries), each made of
//! [metric points](metric_point::MetricPoint). Every point is then denormalized into a
//! [flat row](flat_row::FlatRow) carrying its series' name and labels.

pub mod constants;
pub mod flat_row;
pub mod metric_point;
pub mod sample_series;
