use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::external::provider_error::ProviderError;

/// Client carrying the descriptive identity and timeout every provider call uses.
pub fn build_client(upstream: &UpstreamConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(upstream.user_agent.as_str())
        .timeout(upstream.timeout)
        .build()
}

/// Send the request and decode a 2xx JSON body into `T`.
pub async fn fetch_json<T: DeserializeOwned>(
    provider: &str,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let resp = request.send().await.map_err(|e| {
        warn!("{} request failed: {}", provider, e);
        ProviderError::from_transport(&e)
    })?;

    let status = resp.status();
    if !status.is_success() {
        warn!("{} responded with HTTP {}", provider, status);
        return Err(ProviderError::Status(status.as_u16()));
    }

    let body = resp.bytes().await.map_err(|e| {
        warn!("{} body read failed: {}", provider, e);
        ProviderError::from_transport(&e)
    })?;
    debug!("{} responded with {} bytes", provider, body.len());

    serde_json::from_slice::<T>(&body).map_err(|e| {
        warn!("{} returned an unparseable body: {}", provider, e);
        ProviderError::Malformed(e.to_string())
    })
}
