use tracing::debug;

use crate::errors::AppError;
use crate::models::{
    LoanVsDeposit, ProjectionComparison, ProjectionOutcome, ProjectionPoint, ProjectionScenario,
};

/// Rates are annual fractions; anything outside this band is a unit mistake
/// (e.g. `12` instead of `0.12`) rather than a real scenario.
const MIN_RATE: f64 = -1.0;
const MAX_RATE: f64 = 1.0;

/// Upper bound on the length of a year-by-year schedule.
pub const MAX_SCHEDULE_YEARS: i64 = 100;

/// `principal × (1 + rate)^years`.
pub fn future_value(principal: f64, rate: f64, years: i64) -> Result<f64, AppError> {
    validate(principal, rate, years)?;
    let value = principal * (1.0 + rate).powf(years as f64);
    if !value.is_finite() {
        return Err(AppError::InvalidParameters(format!(
            "projection over {years} years exceeds the representable range"
        )));
    }
    Ok(value)
}

fn validate(principal: f64, rate: f64, years: i64) -> Result<(), AppError> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(AppError::InvalidParameters(
            "principal must be a non-negative number".to_string(),
        ));
    }
    if !rate.is_finite() || !(MIN_RATE..=MAX_RATE).contains(&rate) {
        return Err(AppError::InvalidParameters(format!(
            "rate must be between {MIN_RATE} and {MAX_RATE}"
        )));
    }
    if years < 0 {
        return Err(AppError::InvalidParameters(
            "years must not be negative".to_string(),
        ));
    }
    Ok(())
}

fn outcome(scenario: ProjectionScenario) -> Result<ProjectionOutcome, AppError> {
    let future_value = future_value(scenario.principal, scenario.rate, scenario.years)?;
    Ok(ProjectionOutcome {
        scenario,
        future_value,
    })
}

/// Project the same principal at two rates over one horizon.
pub fn compare(
    principal: f64,
    rate_a: f64,
    rate_b: f64,
    years: i64,
) -> Result<ProjectionComparison, AppError> {
    let first = outcome(ProjectionScenario { principal, rate: rate_a, years })?;
    let second = outcome(ProjectionScenario { principal, rate: rate_b, years })?;
    let difference = second.future_value - first.future_value;

    debug!(
        "Projection compare: principal={} years={} {} vs {} -> diff {:.2}",
        principal, years, rate_a, rate_b, difference
    );

    Ok(ProjectionComparison {
        first,
        second,
        difference,
    })
}

pub fn loan_vs_deposit(
    amount: f64,
    loan_rate: f64,
    deposit_rate: f64,
    years: i64,
) -> Result<LoanVsDeposit, AppError> {
    let loan_repayment = future_value(amount, loan_rate, years)?;
    let deposit_value = future_value(amount, deposit_rate, years)?;

    Ok(LoanVsDeposit {
        amount,
        years,
        loan_repayment,
        deposit_value,
        net_cost: loan_repayment - deposit_value,
    })
}

/// Value at the end of every year from 0 to `years` inclusive.
pub fn growth_schedule(
    principal: f64,
    rate: f64,
    years: i64,
) -> Result<Vec<ProjectionPoint>, AppError> {
    validate(principal, rate, years)?;
    if years > MAX_SCHEDULE_YEARS {
        return Err(AppError::InvalidParameters(format!(
            "years must be at most {MAX_SCHEDULE_YEARS} for a schedule"
        )));
    }

    (0..=years)
        .map(|year| {
            future_value(principal, rate, year).map(|value| ProjectionPoint { year, value })
        })
        .collect()
}
