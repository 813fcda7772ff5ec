//! OpenAI Client Error Handling
//!
//! Single error type returned by every client operation. Transport failures
//! are carried through untouched; everything else is classified here.

use serde::Deserialize;
use std::time::Duration;

/// Client error type
#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    /// Connection, TLS or body-read failure from the HTTP client
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        error_type: Option<String>,
        code: Option<String>,
    },

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to deserialize response body: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error(
        "Logprob arrays differ in length: tokens={tokens}, token_logprobs={token_logprobs}, top_logprobs={top_logprobs}, text_offset={text_offset}"
    )]
    LogprobLengthMismatch {
        tokens: usize,
        token_logprobs: usize,
        top_logprobs: usize,
        text_offset: usize,
    },
}

/// Client result type
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// Error envelope returned by the API on failure
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<serde_json::Value>,
}

impl OpenAIError {
    /// Build an API error from a status code and raw response body.
    ///
    /// Falls back to the raw body text when it is not the usual error envelope.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => Self::Api {
                status,
                message: envelope.error.message,
                error_type: envelope.error.error_type,
                code: envelope.error.code.and_then(|code| match code {
                    serde_json::Value::Null => None,
                    serde_json::Value::String(s) => Some(s),
                    other => Some(other.to_string()),
                }),
            },
            Err(_) => Self::Api {
                status,
                message: String::from_utf8_lossy(body).trim().to_string(),
                error_type: None,
                code: None,
            },
        }
    }

    /// HTTP status of the failure, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for failures of the network layer itself
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Http(_) => "transport",
            Self::Api { status: 401, .. } => "auth",
            Self::Api { status: 429, .. } => "rate_limit",
            Self::Api { .. } => "api",
            Self::Serialize(_) | Self::Deserialize(_) => "parsing",
            Self::Cancelled => "cancelled",
            Self::Timeout(_) => "timeout",
            Self::Configuration(_) => "configuration",
            Self::InvalidRequest(_) | Self::InvalidModel(_) => "invalid_request",
            Self::LogprobLengthMismatch { .. } => "response_shape",
        }
    }
}
