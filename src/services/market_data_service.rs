use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::external::market_data_provider::MarketDataProvider;
use crate::external::provider_error::ProviderError;
use crate::models::{DateWindow, HistoricalClose};

// Just enough of the chart payload to pick the first bar's close.
#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    #[serde(default)]
    indicators: Option<ChartIndicators>,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

fn upstream_error(operation: &str, subject: &str, e: ProviderError) -> AppError {
    match &e {
        ProviderError::Malformed(_) => {
            error!("{} for {} got a malformed payload: {}", operation, subject, e)
        }
        _ => warn!("{} for {} failed: {}", operation, subject, e),
    }
    AppError::from(e)
}

/// Forward a free-text symbol search. The payload is returned as received.
pub async fn search(provider: &dyn MarketDataProvider, query: &str) -> Result<Value, AppError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidQuery("search query must not be empty".to_string()));
    }

    provider
        .search(query)
        .await
        .map_err(|e| upstream_error("Symbol search", query, e))
}

/// Close of the first bar on `date`, or `None` when the provider has no bar
/// for that day.
pub async fn historical_close(
    provider: &dyn MarketDataProvider,
    ticker: &str,
    date: DateTime<Utc>,
) -> Result<HistoricalClose, AppError> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(AppError::InvalidParameters("ticker is required".to_string()));
    }

    let day = date.date_naive();
    let window = DateWindow::single_day(day)?;
    let payload = provider
        .chart(ticker, &window)
        .await
        .map_err(|e| upstream_error("Historical close", ticker, e))?;

    let close = first_close(payload).map_err(|e| upstream_error("Historical close", ticker, e))?;
    if close.is_none() {
        info!("No bar for {} on {}", ticker, day);
    }

    Ok(HistoricalClose {
        ticker: ticker.to_string(),
        date: day,
        close,
    })
}

fn first_close(payload: Value) -> Result<Option<f64>, ProviderError> {
    let envelope: ChartEnvelope =
        serde_json::from_value(payload).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let Some(result) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(None);
    };
    if result.timestamp.map_or(true, |ts| ts.is_empty()) {
        return Ok(None);
    }

    Ok(result
        .indicators
        .and_then(|i| i.quote.into_iter().next())
        .and_then(|q| q.close.into_iter().next())
        .flatten())
}

/// Look up several tickers for the same day concurrently. The first failure
/// abandons the remaining lookups.
pub async fn historical_closes(
    provider: &dyn MarketDataProvider,
    tickers: &[String],
    date: DateTime<Utc>,
) -> Result<Vec<HistoricalClose>, AppError> {
    try_join_all(
        tickers
            .iter()
            .map(|ticker| historical_close(provider, ticker, date)),
    )
    .await
}

/// Raw daily bars for `[period1, period2]`, requested with one extra day on
/// each side because providers drop boundary days.
pub async fn range_quotes(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    period1: DateTime<Utc>,
    period2: DateTime<Utc>,
) -> Result<Value, AppError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(AppError::InvalidParameters("symbol is required".to_string()));
    }

    let window = DateWindow::new(period1, period2)?.padded()?;
    provider
        .chart(symbol, &window)
        .await
        .map_err(|e| upstream_error("Range quotes", symbol, e))
}
