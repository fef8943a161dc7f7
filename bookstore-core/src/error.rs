//! Error types for Bookstore Core

use thiserror::Error;

/// Result type alias using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by a [`BookApi`](crate::api::BookApi) call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the backend or never returned
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("Backend returned {status}: {}", message.as_deref().unwrap_or("no details"))]
    Status {
        status: u16,
        /// The payload's `error` field, when the backend sent one
        message: Option<String>,
    },

    /// The backend answered 2xx but the body could not be decoded
    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// True for failures where the backend was never heard from
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::InvalidUrl(_))
    }

    /// Server-provided error text, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Errors that occur while reading client configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown UI variant: {0} (expected \"rich\" or \"plain\")")]
    UnknownVariant(String),

    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(String),
}
