use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of the provider's `chartData` array.
///
/// Decoding never fails for a well-formed JSON object: fields of the wrong
/// type degrade to their defaults and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AllocationCategory {
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_percentage")]
    pub percentage: f64,
    #[serde(default, deserialize_with = "lenient_fill")]
    pub fill: Option<String>,
}

impl AllocationCategory {
    pub fn new(category: &str, percentage: f64, fill: Option<&str>) -> Self {
        Self {
            category: category.to_string(),
            percentage,
            fill: fill.map(str::to_string),
        }
    }
}

/// The part of the recommendation provider's response this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationPayload {
    #[serde(rename = "chartData", deserialize_with = "lenient_categories")]
    pub chart_data: Vec<AllocationCategory>,
}

/// Canonical slice handed to the renderer. `color` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationResponse {
    pub allocation: Vec<ChartSlice>,
}

fn lenient_categories<'de, D>(deserializer: D) -> Result<Vec<AllocationCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_percentage<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if value.is_finite() { value } else { 0.0 })
}

fn lenient_fill<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let payload: RecommendationPayload = serde_json::from_str(
            r##"{
                "chartData": [
                    {"category": "Equity", "percentage": 40, "fill": "#123456", "risk": "high"}
                ],
                "model_version": "v3"
            }"##,
        )
        .unwrap();

        assert_eq!(
            payload.chart_data,
            vec![AllocationCategory::new("Equity", 40.0, Some("#123456"))]
        );
    }

    #[test]
    fn test_wrongly_typed_fields_degrade_to_defaults() {
        let payload: RecommendationPayload = serde_json::from_str(
            r#"{"chartData": [
                {"category": "Bonds", "percentage": "25.5", "fill": null},
                {"category": 7, "percentage": "lots", "fill": 42},
                {},
                "Gold ETFs"
            ]}"#,
        )
        .unwrap();

        assert_eq!(payload.chart_data[0], AllocationCategory::new("Bonds", 25.5, None));
        assert_eq!(payload.chart_data[1], AllocationCategory::new("", 0.0, None));
        assert_eq!(payload.chart_data[2], AllocationCategory::default());
        assert_eq!(payload.chart_data[3], AllocationCategory::default());
    }

    #[test]
    fn test_missing_chart_data_is_rejected() {
        let result = serde_json::from_str::<RecommendationPayload>(r#"{"allocation": []}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<RecommendationPayload>(r#"{"chartData": {}}"#);
        assert!(result.is_err());
    }
}
