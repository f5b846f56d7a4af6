use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_MARKET_DATA_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; Allocfolio/0.1)";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Settings shared by every outbound provider client.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    pub base_url: Url,
    pub api_key: Option<String>,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone)]
pub struct MarketDataConfig {
    pub base_url: Url,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub recommendation: RecommendationConfig,
    pub market_data: MarketDataConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any key lookup, so tests never touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "UPSTREAM_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "UPSTREAM_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        let upstream = UpstreamConfig {
            user_agent: lookup("HTTP_USER_AGENT")
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        };

        let recommendation_url = lookup("RECOMMENDATION_API_URL")
            .ok_or(ConfigError::Missing("RECOMMENDATION_API_URL"))?;
        let market_url = lookup("MARKET_DATA_BASE_URL")
            .unwrap_or_else(|| DEFAULT_MARKET_DATA_BASE_URL.to_string());

        Ok(Self {
            bind_addr,
            recommendation: RecommendationConfig {
                base_url: parse_url("RECOMMENDATION_API_URL", &recommendation_url)?,
                api_key: lookup("RECOMMENDATION_API_KEY").filter(|k| !k.is_empty()),
                upstream: upstream.clone(),
            },
            market_data: MarketDataConfig {
                base_url: parse_url("MARKET_DATA_BASE_URL", &market_url)?,
                upstream,
            },
        })
    }
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("unsupported scheme {other}"),
        }),
    }
}
