// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

//! Client for the Prometheus HTTP API.
//!
//! Only the instant query endpoint is used. A range selector such as `up[3600s]` evaluated
//! at an instant returns every raw sample of that hour as a matrix.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::metric::metric_point::MetricPoint;
use crate::metric::sample_series::{Label, SampleSeries};
use crate::query_manager::querier::{MetricsQuerier, QueryResponse, QueryResult};
use crate::utils::error::ExportError;
use crate::utils::time::datetime_to_epoch_seconds;

const QUERY_PATH: &str = "/api/v1/query";

/// Response envelope of the Prometheus HTTP API.
#[derive(Debug, Deserialize)]
struct ApiResponse {
  status: String,
  #[serde(default)]
  data: Option<ApiData>,
  #[serde(default)]
  warnings: Vec<String>,
  #[serde(default, rename = "errorType")]
  error_type: Option<String>,
  #[serde(default)]
  error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiData {
  #[serde(rename = "resultType")]
  result_type: String,
  /// Decoded according to the result type; only matrices are decoded.
  #[serde(default)]
  result: Value,
}

#[derive(Debug, Deserialize)]
struct ApiSeries {
  /// Labels of the series, in the order Prometheus reported them.
  metric: Map<String, Value>,
  /// Samples as `[<unix seconds>, "<value>"]` pairs.
  #[serde(default)]
  values: Vec<(f64, String)>,
}

impl ApiSeries {
  fn into_sample_series(self) -> Result<SampleSeries, ExportError> {
    let labels = self
      .metric
      .into_iter()
      .map(|(name, value)| {
        let value = match value {
          Value::String(s) => s,
          other => other.to_string(),
        };
        Label { name, value }
      })
      .collect();

    let mut points = Vec::with_capacity(self.values.len());
    for (seconds, value) in self.values {
      let value = value.parse::<f64>().map_err(|_| {
        ExportError::MalformedResult(format!("Invalid sample value {:?}", value))
      })?;
      let timestamp_ms = (seconds * 1000.0).round() as i64;
      points.push(MetricPoint::new(timestamp_ms, value));
    }

    Ok(SampleSeries::new(labels, points))
  }
}

/// Decode the body of a query response.
pub(crate) fn parse_query_response(
  status: StatusCode,
  body: &str,
) -> Result<QueryResponse, ExportError> {
  let response: ApiResponse = match serde_json::from_str(body) {
    Ok(response) => response,
    Err(err) if status.is_success() => {
      return Err(ExportError::MalformedResult(format!(
        "Could not decode query response: {}",
        err
      )));
    }
    Err(_) => {
      return Err(ExportError::FetchFailure(format!(
        "Prometheus returned {}",
        status
      )));
    }
  };

  if response.status != "success" {
    return Err(ExportError::FetchFailure(format!(
      "{}: {}",
      response.error_type.unwrap_or_else(|| "unknown".to_owned()),
      response.error.unwrap_or_else(|| status.to_string())
    )));
  }

  let data = response.data.ok_or_else(|| {
    ExportError::MalformedResult("Query response has no data".to_owned())
  })?;

  let result = match data.result_type.as_str() {
    "matrix" => {
      let series: Vec<ApiSeries> = serde_json::from_value(data.result)
        .map_err(|err| ExportError::MalformedResult(format!("Invalid matrix: {}", err)))?;
      QueryResult::Matrix(
        series
          .into_iter()
          .map(ApiSeries::into_sample_series)
          .collect::<Result<Vec<_>, _>>()?,
      )
    }
    "vector" => QueryResult::Vector,
    "scalar" => QueryResult::Scalar,
    "string" => QueryResult::String,
    other => {
      return Err(ExportError::MalformedResult(format!(
        "Unknown result type {:?}",
        other
      )))
    }
  };

  Ok(QueryResponse::new(result, response.warnings))
}

/// Queries a Prometheus server (or any server implementing its HTTP API).
#[derive(Debug)]
pub struct PrometheusClient {
  client: reqwest::Client,
  address: String,
}

impl PrometheusClient {
  /// Create a client for the server at the given address, e.g. `http://localhost:9090`.
  /// Every request is bounded by the given timeout.
  pub fn new(address: &str, timeout: Duration) -> Result<Self, ExportError> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|err| {
        ExportError::InvalidConfiguration(format!("Could not build HTTP client: {}", err))
      })?;

    Ok(PrometheusClient {
      client,
      address: address.trim_end_matches('/').to_owned(),
    })
  }

  fn get_query_url(&self) -> String {
    format!("{}{}", self.address, QUERY_PATH)
  }
}

#[async_trait]
impl MetricsQuerier for PrometheusClient {
  async fn query(&self, query: &str, time: DateTime<Utc>) -> Result<QueryResponse, ExportError> {
    let url = self.get_query_url();
    let time = datetime_to_epoch_seconds(&time).to_string();
    debug!("Querying {} with query={} time={}", url, query, time);

    let response = self
      .client
      .get(&url)
      .query(&[("query", query), ("time", time.as_str())])
      .send()
      .await?;
    let status = response.status();
    let body = response.text().await?;

    parse_query_response(status, &body)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use tokio::io::{AsyncReadExt, AsyncWriteExt};
  use tokio::net::TcpListener;

  use crate::metric::constants::METRIC_NAME_LABEL;
  use crate::utils::time::parse_rfc3339;

  /// Answer a single HTTP request with the given JSON body, and return the raw request.
  async fn serve_once(listener: TcpListener, body: &'static str) -> String {
    let (mut stream, _) = listener.accept().await.unwrap();

    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
      let n = stream.read(&mut buf).await.unwrap();
      if n == 0 {
        break;
      }
      request.extend_from_slice(&buf[..n]);
    }

    let response = format!(
      "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
      body.len(),
      body
    );
    stream.write_all(response.as_bytes()).await.unwrap();
    stream.shutdown().await.unwrap();

    String::from_utf8(request).unwrap()
  }

  #[test]
  fn test_parse_matrix() {
    let body = r#"{
      "status": "success",
      "data": {
        "resultType": "matrix",
        "result": [
          {
            "metric": {"__name__": "up", "job": "node", "instance": "a:9100"},
            "values": [[1700000000, "1"], [1700000015.5, "0"]]
          },
          {
            "metric": {"job": "node"},
            "values": [[1700000000.001, "NaN"], [1700000001, "+Inf"], [1700000002, "-Inf"]]
          }
        ]
      }
    }"#;

    let response = parse_query_response(StatusCode::OK, body).unwrap();
    assert!(response.warnings.is_empty());

    let QueryResult::Matrix(series) = response.result else {
      panic!("Expected a matrix result");
    };
    assert_eq!(series.len(), 2);

    assert_eq!(series[0].get_name(), "up");
    // Labels keep the order in which they were reported.
    assert_eq!(
      series[0].get_labels(),
      &[Label::new("job", "node"), Label::new("instance", "a:9100")]
    );
    assert_eq!(
      series[0].get_points(),
      &[
        MetricPoint::new(1_700_000_000_000, 1.0),
        MetricPoint::new(1_700_000_015_500, 0.0)
      ]
    );

    assert_eq!(series[1].get_name(), "");
    let points = series[1].get_points();
    assert_eq!(points[0].get_timestamp_ms(), 1_700_000_000_001);
    assert!(points[0].get_value().is_nan());
    assert_eq!(points[1].get_value(), f64::INFINITY);
    assert_eq!(points[2].get_value(), f64::NEG_INFINITY);
    assert!(series[1]
      .get_labels()
      .iter()
      .all(|label| label.name != METRIC_NAME_LABEL));
  }

  #[test]
  fn test_parse_warnings() {
    let body = r#"{
      "status": "success",
      "data": {"resultType": "matrix", "result": []},
      "warnings": ["partial response"]
    }"#;

    let response = parse_query_response(StatusCode::OK, body).unwrap();
    assert_eq!(response.warnings, vec!["partial response".to_owned()]);
    assert_eq!(response.result, QueryResult::Matrix(Vec::new()));
  }

  #[test]
  fn test_parse_other_result_types() {
    let body = r#"{
      "status": "success",
      "data": {"resultType": "vector", "result": [{"metric": {}, "value": [1, "1"]}]}
    }"#;
    let response = parse_query_response(StatusCode::OK, body).unwrap();
    assert_eq!(response.result, QueryResult::Vector);

    let body = r#"{"status": "success", "data": {"resultType": "scalar", "result": [1, "1"]}}"#;
    let response = parse_query_response(StatusCode::OK, body).unwrap();
    assert_eq!(response.result.result_type(), "scalar");
  }

  #[test]
  fn test_parse_error_status() {
    let body = r#"{"status": "error", "errorType": "bad_data", "error": "parse error"}"#;
    assert_eq!(
      parse_query_response(StatusCode::BAD_REQUEST, body),
      Err(ExportError::FetchFailure("bad_data: parse error".to_owned()))
    );
  }

  #[test]
  fn test_parse_undecodable_body() {
    assert!(matches!(
      parse_query_response(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>"),
      Err(ExportError::FetchFailure(_))
    ));
    assert!(matches!(
      parse_query_response(StatusCode::OK, "not json"),
      Err(ExportError::MalformedResult(_))
    ));
  }

  #[test]
  fn test_parse_unknown_result_type() {
    let body = r#"{"status": "success", "data": {"resultType": "histogram", "result": []}}"#;
    assert!(matches!(
      parse_query_response(StatusCode::OK, body),
      Err(ExportError::MalformedResult(_))
    ));
  }

  #[test]
  fn test_parse_invalid_sample_value() {
    let body = r#"{
      "status": "success",
      "data": {"resultType": "matrix", "result": [{"metric": {}, "values": [[1, "abc"]]}]}
    }"#;
    assert!(matches!(
      parse_query_response(StatusCode::OK, body),
      Err(ExportError::MalformedResult(_))
    ));
  }

  #[test]
  fn test_query_url() {
    let client = PrometheusClient::new("http://localhost:9090/", Duration::from_secs(5)).unwrap();
    assert_eq!(client.get_query_url(), "http://localhost:9090/api/v1/query");
  }

  #[tokio::test]
  async fn test_query() {
    let body = r#"{
      "status": "success",
      "data": {
        "resultType": "matrix",
        "result": [
          {
            "metric": {"__name__": "up", "zeta": "z", "alpha": "a"},
            "values": [[1704067200.5, "1"], [1704067215, "0"]]
          }
        ]
      }
    }"#;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://{}/", listener.local_addr().unwrap());
    let server = tokio::spawn(serve_once(listener, body));

    let client = PrometheusClient::new(&address, Duration::from_secs(5)).unwrap();
    let time = parse_rfc3339("2024-01-01T01:00:00.250Z").unwrap();
    let response = client.query("up[3600s]", time).await.unwrap();

    let request = server.await.unwrap();
    let request_line = request.lines().next().unwrap();
    assert_eq!(
      request_line,
      "GET /api/v1/query?query=up%5B3600s%5D&time=1704070800.25 HTTP/1.1"
    );

    assert!(response.warnings.is_empty());
    let QueryResult::Matrix(series) = response.result else {
      panic!("Expected a matrix result");
    };
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].get_name(), "up");
    assert_eq!(
      series[0].get_labels(),
      &[Label::new("zeta", "z"), Label::new("alpha", "a")]
    );
    assert_eq!(
      series[0].get_points(),
      &[
        MetricPoint::new(1_704_067_200_500, 1.0),
        MetricPoint::new(1_704_067_215_000, 0.0)
      ]
    );
  }
}
