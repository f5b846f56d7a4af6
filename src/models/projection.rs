use serde::{Deserialize, Serialize};

/// Inputs for one compound-growth projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionScenario {
    pub principal: f64,
    pub rate: f64,
    pub years: i64,
}

/// Two projections over the same horizon. `difference` is `second - first`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionComparison {
    pub first: ProjectionOutcome,
    pub second: ProjectionOutcome,
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionOutcome {
    pub scenario: ProjectionScenario,
    pub future_value: f64,
}

/// Borrowing an amount versus keeping the same amount on deposit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanVsDeposit {
    pub amount: f64,
    pub years: i64,
    pub loan_repayment: f64,
    pub deposit_value: f64,
    /// `loan_repayment - deposit_value`; positive when the loan costs more
    /// than the deposit earns.
    pub net_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub year: i64,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub principal: Option<f64>,
    pub rate_a: Option<f64>,
    pub rate_b: Option<f64>,
    pub years: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LoanVsDepositParams {
    pub amount: Option<f64>,
    pub loan_rate: Option<f64>,
    pub deposit_rate: Option<f64>,
    pub years: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct GrowthParams {
    pub principal: Option<f64>,
    pub rate: Option<f64>,
    pub years: Option<i64>,
}
