//! Error shape shared by every client call to the backend

use thiserror::Error;

/// Result of an API call; callers always get a value back, never a panic
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request timed out")]
    TimedOut,

    #[error("{status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("{message}")]
    NetworkError { message: String },
}

impl ApiError {
    /// Non-2xx response. An empty body is replaced by the status text.
    pub fn http(status: u16, body: impl Into<String>, status_text: &str) -> Self {
        let body = body.into();
        let body = if body.trim().is_empty() {
            status_text.to_string()
        } else {
            body
        };
        ApiError::HttpError { status, body }
    }

    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            "Unknown network error".to_string()
        } else {
            message
        };
        ApiError::NetworkError { message }
    }
}
