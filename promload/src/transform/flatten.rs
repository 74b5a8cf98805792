// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use crate::metric::flat_row::FlatRow;
use crate::metric::sample_series::{Label, SampleSeries};

/// Format a label as `key="value"`.
pub fn format_label(label: &Label) -> String {
  format!("{}=\"{}\"", label.name, label.value)
}

/// Flatten series into one row per sample.
///
/// Rows are ordered by series, in the order given, then by sample within each series. Labels
/// keep the order of the series' label list: they are not sorted.
pub fn flatten_series(series: Vec<SampleSeries>) -> Vec<FlatRow> {
  let num_rows = series.iter().map(|s| s.get_points().len()).sum();
  let mut rows = Vec::with_capacity(num_rows);

  for sample_series in series {
    let (name, labels, points) = sample_series.into_parts();
    let labels: Vec<String> = labels.iter().map(format_label).collect();

    for point in points {
      rows.push(FlatRow::new(
        point.datetime(),
        &name,
        point.get_value(),
        labels.clone(),
      ));
    }
  }

  rows
}
