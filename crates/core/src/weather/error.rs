use thiserror::Error;

/// Errors that can occur while obtaining a reading from the upstream API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeatherError {
    #[error("Upstream request failed: {0}")]
    RequestFailed(String),
    #[error("Upstream request timed out: {0}")]
    Timeout(String),
    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),
}

/// Result type for weather operations.
pub type Result<T> = std::result::Result<T, WeatherError>;
