use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use allocfolio_backend::app::create_app;
use allocfolio_backend::config::AppConfig;
use allocfolio_backend::external::recommendation_provider::RecommendationClient;
use allocfolio_backend::external::yahoofinance::YahooFinanceProvider;
use allocfolio_backend::logging::{init_logging, LoggingConfig};
use allocfolio_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(&LoggingConfig::from_env())?;

    let config = AppConfig::from_env().context("loading configuration")?;

    let recommendation = RecommendationClient::new(&config.recommendation)
        .context("building recommendation client")?;
    let market_data = YahooFinanceProvider::new(&config.market_data)
        .context("building market data client")?;
    tracing::info!(
        "Providers: recommendation at {}, market data at {}",
        config.recommendation.base_url,
        config.market_data.base_url
    );

    let state = AppState {
        recommendation: Arc::new(recommendation),
        market_data: Arc::new(market_data),
    };
    let app = create_app(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!("Allocfolio backend running at http://{}/", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
