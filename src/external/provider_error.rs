use thiserror::Error;

/// Failure of a single call to an external provider.
///
/// Variants carry only generic text; provider bodies are never stored here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ProviderError {
    /// Classify a reqwest failure without keeping its text, which includes the
    /// request URL and therefore query parameters and credentials.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        ProviderError::Transport(reason.to_string())
    }
}
