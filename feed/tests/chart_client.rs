//! Integration tests for the chart client against a mocked endpoint

use chrono::NaiveDate;
use eq_feed::{ChartClient, FeedError, HistorySource, ProviderConfig};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// 2024-03-28 00:00 UTC, then consecutive days
const DAY: i64 = 86_400;
const T0: i64 = 1_711_584_000;

fn window() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2024, 3, 28).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
    )
}

fn chart_body(timestamps: &[i64], closes: &[Option<f64>]) -> serde_json::Value {
    json!({
        "chart": {
            "result": [{
                "timestamp": timestamps,
                "indicators": { "quote": [{ "close": closes }] }
            }],
            "error": null
        }
    })
}

async fn client_for(server: &MockServer) -> ChartClient {
    ChartClient::new(ProviderConfig {
        endpoint: server.uri(),
        timeout_sec: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetches_daily_closes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NTPC.NS"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(
            &[T0, T0 + DAY, T0 + 2 * DAY],
            &[Some(355.0), Some(357.5), Some(352.2)],
        )))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (start, end) = window();
    let series = client.daily_closes("NTPC.NS", start, end).await.unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.points()[0].close, 355.0);
    assert_eq!(
        series.points()[0].date,
        NaiveDate::from_ymd_opt(2024, 3, 28).unwrap()
    );
}

#[tokio::test]
async fn test_drops_rows_with_missing_closes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/INFY.NS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(
            &[T0, T0 + DAY, T0 + 2 * DAY],
            &[Some(1500.0), None, Some(1510.0)],
        )))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (start, end) = window();
    let series = client.daily_closes("INFY.NS", start, end).await.unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series.points()[1].close, 1510.0);
}

#[tokio::test]
async fn test_empty_result_is_a_skip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/GHOST.NS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": { "result": null, "error": null }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (start, end) = window();
    let err = client
        .daily_closes("GHOST.NS", start, end)
        .await
        .unwrap_err();

    assert!(matches!(err, FeedError::NoData(ref s) if s == "GHOST.NS"));
    assert!(err.is_skip());
}

#[tokio::test]
async fn test_error_payload_names_the_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/BAD.NS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found" }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (start, end) = window();
    let err = client.daily_closes("BAD.NS", start, end).await.unwrap_err();

    match err {
        FeedError::ProviderError { symbol, message, .. } => {
            assert_eq!(symbol, "BAD.NS");
            assert!(message.contains("No data found"));
        }
        other => panic!("expected ProviderError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_failure_carries_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NTPC.NS"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (start, end) = window();
    let err = client.daily_closes("NTPC.NS", start, end).await.unwrap_err();

    match err {
        FeedError::ProviderError { ref code, .. } => assert_eq!(code.as_deref(), Some("500")),
        other => panic!("expected ProviderError, got {:?}", other),
    }
    assert!(!err.is_skip());
}

#[tokio::test]
async fn test_unsorted_timestamps_come_back_ordered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/KOTAKBANK.NS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(
            &[T0 + 2 * DAY, T0, T0 + DAY],
            &[Some(1800.0), Some(1780.0), Some(1790.0)],
        )))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (start, end) = window();
    let series = client
        .daily_closes("KOTAKBANK.NS", start, end)
        .await
        .unwrap();

    let closes: Vec<f64> = series.points().iter().map(|p| p.close).collect();
    assert_eq!(closes, vec![1780.0, 1790.0, 1800.0]);
}
