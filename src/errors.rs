use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::external::provider_error::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("{}", upstream_unavailable_message(.status, .reason))]
    UpstreamUnavailable { status: Option<u16>, reason: String },
    #[error("Upstream provider returned a malformed response: {0}")]
    UpstreamMalformed(String),
}

fn upstream_unavailable_message(status: &Option<u16>, reason: &str) -> String {
    match status {
        Some(code) => format!("Upstream provider unavailable (HTTP {code})"),
        None => format!("Upstream provider unavailable: {reason}"),
    }
}

impl AppError {
    /// Only transport failures and non-2xx answers are worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::UpstreamUnavailable { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidProfile(_)
            | AppError::InvalidQuery(_)
            | AppError::InvalidParameters(_)
            | AppError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::UpstreamMalformed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let message = match &self {
            // The detail of a malformed body stays in the logs.
            AppError::UpstreamMalformed(_) => {
                "Upstream provider returned a malformed response".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ProviderError> for AppError {
    fn from(value: ProviderError) -> Self {
        match value {
            ProviderError::Transport(reason) => AppError::UpstreamUnavailable {
                status: None,
                reason,
            },
            ProviderError::Status(code) => AppError::UpstreamUnavailable {
                status: Some(code),
                reason: format!("HTTP {code}"),
            },
            ProviderError::Malformed(detail) => AppError::UpstreamMalformed(detail),
        }
    }
}
