use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};
use url::Url;

use crate::config::RecommendationConfig;
use crate::external::http::{build_client, fetch_json};
use crate::external::provider_error::ProviderError;
use crate::models::{AllocationQuery, RecommendationPayload};

#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// One GET to the provider. No retries.
    async fn fetch_allocation(
        &self,
        query: &AllocationQuery,
    ) -> Result<RecommendationPayload, ProviderError>;
}

/// HTTP client for the portfolio-recommendation provider.
pub struct RecommendationClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl RecommendationClient {
    pub fn new(config: &RecommendationConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(&config.upstream)?,
            endpoint: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl RecommendationProvider for RecommendationClient {
    #[instrument(name = "RecommendationFetch", skip_all)]
    async fn fetch_allocation(
        &self,
        query: &AllocationQuery,
    ) -> Result<RecommendationPayload, ProviderError> {
        info!("Requesting allocation from {}", self.endpoint);

        let mut request = self.client.get(self.endpoint.clone()).query(query.params());
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let payload: RecommendationPayload = fetch_json("recommendation provider", request).await?;
        info!("Recommendation provider returned {} categories", payload.chart_data.len());
        Ok(payload)
    }
}
