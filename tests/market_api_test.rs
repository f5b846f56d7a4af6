mod common;

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

use allocfolio_backend::external::provider_error::ProviderError;

use common::{app_with, get, send, FakeMarketData, FakeRecommendations};

fn one_bar(close: f64) -> serde_json::Value {
    json!({
        "chart": {
            "result": [{
                "timestamp": [1704412800],
                "indicators": {"quote": [{"close": [close]}]}
            }]
        }
    })
}

#[tokio::test]
async fn test_search_passes_provider_payload_through() {
    let payload = json!({"quotes": [{"symbol": "HDFCBANK.NS"}], "count": 1});
    let app = app_with(
        FakeRecommendations::answering(Ok(vec![])),
        FakeMarketData::answering(Ok(payload.clone())),
    );

    let (status, body) = send(app, get("/api/market/search?q=hdfc")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_empty_search_is_bad_request() {
    let app = app_with(
        FakeRecommendations::answering(Ok(vec![])),
        FakeMarketData::answering(Ok(json!({}))),
    );

    let (status, body) = send(app, get("/api/market/search?q=")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_historical_close_returns_price() {
    let app = app_with(
        FakeRecommendations::answering(Ok(vec![])),
        FakeMarketData::answering(Ok(one_bar(185.64))),
    );

    let (status, body) = send(app, get("/api/market/historical?ticker=AAPL&date=2024-01-05")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ticker": "AAPL", "date": "2024-01-05", "close": 185.64}));
}

#[tokio::test]
async fn test_historical_close_on_non_trading_day_is_null() {
    let app = app_with(
        FakeRecommendations::answering(Ok(vec![])),
        FakeMarketData::answering(Ok(json!({"chart": {"result": [{"indicators": {"quote": [{}]}}]}}))),
    );

    let (status, body) = send(app, get("/api/market/historical?ticker=XYZ&date=2024-01-06")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["close"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_historical_close_requires_parameters() {
    let app = app_with(
        FakeRecommendations::answering(Ok(vec![])),
        FakeMarketData::answering(Ok(one_bar(1.0))),
    );

    let (status, _) = send(app.clone(), get("/api/market/historical?ticker=AAPL")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app, get("/api/market/historical?date=2024-01-05")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_batch_historical_closes() {
    let market = FakeMarketData::answering(Ok(one_bar(10.5)));
    let app = app_with(FakeRecommendations::answering(Ok(vec![])), market.clone());

    let (status, body) = send(
        app,
        get("/api/market/historical/batch?tickers=TCS.NS,INFY.NS&date=2024-01-05"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(market.windows.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_range_quotes_pads_window() {
    let market = FakeMarketData::answering(Ok(one_bar(3.0)));
    let app = app_with(FakeRecommendations::answering(Ok(vec![])), market.clone());

    let (status, body) = send(
        app,
        get("/api/market/quotes?symbol=INFY.NS&period1=2024-03-04&period2=2024-03-08"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, one_bar(3.0));

    let windows = market.windows.lock().unwrap();
    let (symbol, window) = &windows[0];
    assert_eq!(symbol, "INFY.NS");
    let period1 = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
    let period2 = Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 0).unwrap();
    assert_eq!(window.start(), period1 - Duration::days(1));
    assert_eq!(window.end(), period2 + Duration::days(1));
}

#[tokio::test]
async fn test_inverted_range_is_bad_request() {
    let market = FakeMarketData::answering(Ok(json!({})));
    let app = app_with(FakeRecommendations::answering(Ok(vec![])), market.clone());

    let (status, body) = send(
        app,
        get("/api/market/quotes?symbol=INFY.NS&period1=2024-03-08&period2=2024-03-04"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("period1"));
    assert!(market.windows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_upstream_status_is_reported_generically() {
    let app = app_with(
        FakeRecommendations::answering(Ok(vec![])),
        FakeMarketData::answering(Err(ProviderError::Status(404))),
    );

    let (status, body) = send(
        app,
        get("/api/market/quotes?symbol=NOPE&period1=2024-03-04&period2=2024-03-08"),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "Upstream provider unavailable (HTTP 404)"}));
}

#[tokio::test]
async fn test_malformed_payload_is_bad_gateway() {
    let app = app_with(
        FakeRecommendations::answering(Ok(vec![])),
        FakeMarketData::answering(Err(ProviderError::Malformed("expected value at line 1".into()))),
    );

    let (status, body) = send(
        app,
        get("/api/market/quotes?symbol=AAPL&period1=2024-03-04&period2=2024-03-08"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body["error"].as_str().unwrap().contains("line 1"));
}

#[tokio::test]
async fn test_range_at_latest_representable_instant_is_bad_request() {
    let market = FakeMarketData::answering(Ok(one_bar(1.0)));
    let app = app_with(FakeRecommendations::answering(Ok(vec![])), market.clone());

    let (status, body) = send(
        app,
        get("/api/market/quotes?symbol=AAPL&period1=8210266876799&period2=8210266876799"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(market.windows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_range_at_earliest_representable_instant_is_bad_request() {
    let market = FakeMarketData::answering(Ok(one_bar(1.0)));
    let app = app_with(FakeRecommendations::answering(Ok(vec![])), market.clone());

    let (status, body) = send(
        app,
        get("/api/market/quotes?symbol=AAPL&period1=-8334601228800&period2=-8334601228800"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(market.windows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_historical_close_on_last_representable_day_is_bad_request() {
    let market = FakeMarketData::answering(Ok(one_bar(1.0)));
    let app = app_with(FakeRecommendations::answering(Ok(vec![])), market.clone());

    let (status, body) = send(app, get("/api/market/historical?ticker=AAPL&date=8210266876799")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(market.windows.lock().unwrap().is_empty());
}
