use std::sync::Arc;

use crate::external::market_data_provider::MarketDataProvider;
use crate::external::recommendation_provider::RecommendationProvider;

/// Shared handles to the outbound providers. Holds no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub recommendation: Arc<dyn RecommendationProvider>,
    pub market_data: Arc<dyn MarketDataProvider>,
}
