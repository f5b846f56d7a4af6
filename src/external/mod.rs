pub mod http;
pub mod market_data_provider;
pub mod provider_error;
pub mod recommendation_provider;
pub mod yahoofinance;
