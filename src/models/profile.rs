use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw profile form as submitted by the client.
///
/// Every field is optional and loosely typed: forms send numbers either as
/// JSON numbers or as strings, and validation decides what is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub current_savings: Option<Value>,
    pub monthly_savings: Option<Value>,
    pub investment_horizon_years: Option<Value>,
    pub financial_goal: Option<Value>,
}

/// A validated financial profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileInput {
    pub name: String,
    pub age: u32,
    pub current_savings: f64,
    pub monthly_savings: f64,
    pub investment_horizon_years: u32,
    pub financial_goal: String,
}

/// Ordered query parameters for the recommendation provider.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationQuery {
    params: Vec<(&'static str, String)>,
}

impl AllocationQuery {
    pub(crate) fn new(params: Vec<(&'static str, String)>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}
