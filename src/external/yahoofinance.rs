use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::MarketDataConfig;
use crate::external::http::{build_client, fetch_json};
use crate::external::market_data_provider::MarketDataProvider;
use crate::external::provider_error::ProviderError;
use crate::models::DateWindow;

/// Yahoo Finance market data: symbol search and daily chart bars.
///
/// No API key required, but Yahoo rejects default client signatures, so the
/// client always sends the configured user agent.
pub struct YahooFinanceProvider {
    client: Client,
    base_url: Url,
}

impl YahooFinanceProvider {
    pub fn new(config: &MarketDataConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(&config.upstream)?,
            base_url: config.base_url.clone(),
        })
    }

    /// Append path segments to the base URL, escaping each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::Transport("invalid market data base url".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    #[instrument(name = "YahooSearch", skip(self))]
    async fn search(&self, query: &str) -> Result<Value, ProviderError> {
        let url = self.endpoint(&["v1", "finance", "search"])?;
        debug!("Searching symbols at {}", url);

        let request = self.client.get(url).query(&[("q", query)]);
        fetch_json("yahoo search", request).await
    }

    #[instrument(
        name = "YahooChart",
        skip(self, window),
        fields(period1 = window.period1(), period2 = window.period2())
    )]
    async fn chart(&self, symbol: &str, window: &DateWindow) -> Result<Value, ProviderError> {
        let url = self.endpoint(&["v8", "finance", "chart", symbol])?;
        debug!("Requesting chart from {}", url);

        let request = self.client.get(url).query(&[
            ("period1", window.period1().to_string()),
            ("period2", window.period2().to_string()),
            ("interval", "1d".to_string()),
            ("events", "history".to_string()),
        ]);
        fetch_json("yahoo chart", request).await
    }
}
