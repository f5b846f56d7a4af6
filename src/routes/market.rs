use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{BatchHistoricalParams, HistoricalClose, HistoricalParams, RangeParams, SearchParams};
use crate::services::market_data_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_symbols))
        .route("/historical", get(get_historical_close))
        .route("/historical/batch", get(get_historical_closes))
        .route("/quotes", get(get_range_quotes))
}

fn bad_query(rejection: QueryRejection) -> AppError {
    AppError::InvalidParameters(rejection.body_text())
}

/// GET /api/market/search?q=reliance
pub async fn search_symbols(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(params) = params.map_err(|e| AppError::InvalidQuery(e.body_text()))?;
    let q = params.q.unwrap_or_default();
    info!("GET /market/search - q={}", q);

    let payload = market_data_service::search(state.market_data.as_ref(), &q)
        .await
        .map_err(|e| {
            error!("Symbol search failed for {:?}: {}", q, e);
            e
        })?;
    Ok(Json(payload))
}

/// GET /api/market/historical?ticker=AAPL&date=2024-01-05
pub async fn get_historical_close(
    State(state): State<AppState>,
    params: Result<Query<HistoricalParams>, QueryRejection>,
) -> Result<Json<HistoricalClose>, AppError> {
    let Query(params) = params.map_err(bad_query)?;
    let (ticker, date) = params.validated()?;
    info!("GET /market/historical - ticker={}, date={}", ticker, date.date_naive());

    let close = market_data_service::historical_close(state.market_data.as_ref(), &ticker, date)
        .await
        .map_err(|e| {
            error!("Historical close failed for {}: {}", ticker, e);
            e
        })?;
    Ok(Json(close))
}

/// GET /api/market/historical/batch?tickers=AAPL,MSFT&date=2024-01-05
pub async fn get_historical_closes(
    State(state): State<AppState>,
    params: Result<Query<BatchHistoricalParams>, QueryRejection>,
) -> Result<Json<Vec<HistoricalClose>>, AppError> {
    let Query(params) = params.map_err(bad_query)?;
    let (tickers, date) = params.validated()?;
    info!(
        "GET /market/historical/batch - tickers={}, date={}",
        tickers.len(),
        date.date_naive()
    );

    let closes = market_data_service::historical_closes(state.market_data.as_ref(), &tickers, date)
        .await
        .map_err(|e| {
            error!("Batch historical close failed: {}", e);
            e
        })?;
    Ok(Json(closes))
}

/// GET /api/market/quotes?symbol=INFY.NS&period1=2024-03-04&period2=2024-03-08
pub async fn get_range_quotes(
    State(state): State<AppState>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(params) = params.map_err(bad_query)?;
    let (symbol, period1, period2) = params.validated()?;
    info!(
        "GET /market/quotes - symbol={}, period1={}, period2={}",
        symbol, period1, period2
    );

    let payload = market_data_service::range_quotes(state.market_data.as_ref(), &symbol, period1, period2)
        .await
        .map_err(|e| {
            error!("Range quotes failed for {}: {}", symbol, e);
            e
        })?;
    Ok(Json(payload))
}
