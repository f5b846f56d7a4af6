//! Validates a submitted profile form and turns it into the ordered query the
//! recommendation provider expects.

use serde_json::Value;

use crate::errors::AppError;
use crate::models::{AllocationQuery, ProfileForm, ProfileInput};

/// Query keys, in the order they are sent.
pub const QUERY_KEYS: [&str; 6] = [
    "name",
    "age",
    "current_savings",
    "monthly_savings",
    "investment_horizon_years",
    "financial_goal",
];

/// Validate and coerce every field of the form.
pub fn parse_profile(form: &ProfileForm) -> Result<ProfileInput, AppError> {
    let name = required_text(&form.name, "name")?;
    let age = positive_integer(&form.age, "age")?;
    let current_savings = non_negative_decimal(&form.current_savings, "current_savings")?;
    let monthly_savings = non_negative_decimal(&form.monthly_savings, "monthly_savings")?;
    let investment_horizon_years =
        positive_integer(&form.investment_horizon_years, "investment_horizon_years")?;
    let financial_goal = required_text(&form.financial_goal, "financial_goal")?.to_lowercase();

    Ok(ProfileInput {
        name,
        age,
        current_savings,
        monthly_savings,
        investment_horizon_years,
        financial_goal,
    })
}

pub fn build_query(profile: &ProfileInput) -> AllocationQuery {
    let values = [
        profile.name.clone(),
        profile.age.to_string(),
        profile.current_savings.to_string(),
        profile.monthly_savings.to_string(),
        profile.investment_horizon_years.to_string(),
        profile.financial_goal.to_lowercase(),
    ];

    AllocationQuery::new(QUERY_KEYS.iter().copied().zip(values).collect())
}

pub fn build(form: &ProfileForm) -> Result<AllocationQuery, AppError> {
    parse_profile(form).map(|profile| build_query(&profile))
}

fn missing(field: &str) -> AppError {
    AppError::InvalidProfile(format!("{field} is required"))
}

fn required_text(value: &Option<Value>, field: &str) -> Result<String, AppError> {
    let text = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Null) | None => return Err(missing(field)),
        Some(_) => {
            return Err(AppError::InvalidProfile(format!("{field} must be text")));
        }
    };
    if text.is_empty() {
        return Err(missing(field));
    }
    Ok(text)
}

fn positive_integer(value: &Option<Value>, field: &str) -> Result<u32, AppError> {
    let invalid = || AppError::InvalidProfile(format!("{field} must be a positive whole number"));

    let parsed = match value {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i,
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
                .ok_or_else(invalid)?,
        },
        Some(Value::String(s)) if s.trim().is_empty() => return Err(missing(field)),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        Some(Value::Null) | None => return Err(missing(field)),
        Some(_) => return Err(invalid()),
    };

    if parsed <= 0 {
        return Err(invalid());
    }
    u32::try_from(parsed).map_err(|_| invalid())
}

fn non_negative_decimal(value: &Option<Value>, field: &str) -> Result<f64, AppError> {
    let invalid = || AppError::InvalidProfile(format!("{field} must be a non-negative number"));

    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(invalid)?,
        Some(Value::String(s)) if s.trim().is_empty() => return Err(missing(field)),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| invalid())?,
        Some(Value::Null) | None => return Err(missing(field)),
        Some(_) => return Err(invalid()),
    };

    if !parsed.is_finite() || parsed < 0.0 {
        return Err(invalid());
    }
    Ok(parsed)
}
