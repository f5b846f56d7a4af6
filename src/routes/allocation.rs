use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{AllocationResponse, ProfileForm};
use crate::services::allocation_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(recommend_allocation))
}

/// POST /api/allocation
///
/// Body is the profile form; numeric fields may be sent as numbers or strings.
/// ```json
/// {
///   "name": "Asha",
///   "age": 34,
///   "current_savings": "500000",
///   "monthly_savings": 25000,
///   "investment_horizon_years": 20,
///   "financial_goal": "Retirement"
/// }
/// ```
pub async fn recommend_allocation(
    State(state): State<AppState>,
    body: Result<Json<ProfileForm>, JsonRejection>,
) -> Result<Json<AllocationResponse>, AppError> {
    let Json(form) = body.map_err(|e| AppError::InvalidProfile(e.body_text()))?;
    info!("POST /allocation - requesting recommendation");

    let allocation = allocation_service::recommend(state.recommendation.as_ref(), &form)
        .await
        .map_err(|e| {
            error!("Allocation recommendation failed: {}", e);
            e
        })?;
    Ok(Json(AllocationResponse { allocation }))
}
