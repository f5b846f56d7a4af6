use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::external::provider_error::ProviderError;
use crate::external::recommendation_provider::RecommendationProvider;
use crate::models::{ChartSlice, ProfileForm};
use crate::services::{allocation_request_builder, chart_normalizer};

/// Validate the form, ask the provider for an allocation, and normalize it
/// into chart slices. Any provider failure aborts the whole request.
pub async fn recommend(
    provider: &dyn RecommendationProvider,
    form: &ProfileForm,
) -> Result<Vec<ChartSlice>, AppError> {
    let query = allocation_request_builder::build(form)?;

    let payload = provider.fetch_allocation(&query).await.map_err(|e| {
        match &e {
            ProviderError::Malformed(_) => {
                error!("Recommendation provider returned a malformed payload: {}", e)
            }
            _ => warn!("Recommendation provider call failed: {}", e),
        }
        AppError::from(e)
    })?;

    let slices = chart_normalizer::normalize(&payload.chart_data);
    info!("Normalized {} allocation slices", slices.len());
    Ok(slices)
}
