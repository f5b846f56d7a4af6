use async_trait::async_trait;
use serde_json::Value;

use crate::external::provider_error::ProviderError;
use crate::models::DateWindow;

/// Raw access to a market-data provider. Payloads are returned as the
/// provider sent them; interpretation happens in the market data service.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Value, ProviderError>;

    /// Daily bars for `symbol` between `window.period1()` and `window.period2()`.
    async fn chart(&self, symbol: &str, window: &DateWindow) -> Result<Value, ProviderError>;
}
