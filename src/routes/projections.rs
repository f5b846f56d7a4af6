use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{
    CompareParams, GrowthParams, LoanVsDeposit, LoanVsDepositParams, ProjectionComparison,
    ProjectionPoint,
};
use crate::services::projection_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/compare", get(compare_growth))
        .route("/loan-vs-deposit", get(compare_loan_vs_deposit))
        .route("/growth", get(growth_schedule))
}

fn bad_query(rejection: QueryRejection) -> AppError {
    AppError::InvalidParameters(rejection.body_text())
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::InvalidParameters(format!("{name} is required")))
}

/// GET /api/projections/compare?principal=500000&rate_a=0.10&rate_b=0.12&years=20
pub async fn compare_growth(
    params: Result<Query<CompareParams>, QueryRejection>,
) -> Result<Json<ProjectionComparison>, AppError> {
    let Query(params) = params.map_err(bad_query)?;
    info!("GET /projections/compare - {:?}", params);

    let comparison = projection_service::compare(
        required(params.principal, "principal")?,
        required(params.rate_a, "rate_a")?,
        required(params.rate_b, "rate_b")?,
        required(params.years, "years")?,
    )?;
    Ok(Json(comparison))
}

/// GET /api/projections/loan-vs-deposit?amount=100000&loan_rate=0.09&deposit_rate=0.06&years=5
pub async fn compare_loan_vs_deposit(
    params: Result<Query<LoanVsDepositParams>, QueryRejection>,
) -> Result<Json<LoanVsDeposit>, AppError> {
    let Query(params) = params.map_err(bad_query)?;
    info!("GET /projections/loan-vs-deposit - {:?}", params);

    let result = projection_service::loan_vs_deposit(
        required(params.amount, "amount")?,
        required(params.loan_rate, "loan_rate")?,
        required(params.deposit_rate, "deposit_rate")?,
        required(params.years, "years")?,
    )?;
    Ok(Json(result))
}

/// GET /api/projections/growth?principal=100000&rate=0.08&years=10
pub async fn growth_schedule(
    params: Result<Query<GrowthParams>, QueryRejection>,
) -> Result<Json<Vec<ProjectionPoint>>, AppError> {
    let Query(params) = params.map_err(bad_query)?;
    info!("GET /projections/growth - {:?}", params);

    let schedule = projection_service::growth_schedule(
        required(params.principal, "principal")?,
        required(params.rate, "rate")?,
        required(params.years, "years")?,
    )?;
    Ok(Json(schedule))
}
