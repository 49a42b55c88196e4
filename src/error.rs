use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// A single error object from a JSON:API error response.
///
/// Error responses carry `{"errors": [...]}`; every member is optional on
/// the wire, so all fields are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    /// HTTP status code as a string, e.g. `"404"`.
    #[serde(default)]
    pub status: Option<String>,

    /// Application-specific error code.
    #[serde(default)]
    pub code: Option<String>,

    /// Short human-readable summary.
    #[serde(default)]
    pub title: Option<String>,

    /// Detailed explanation of this occurrence.
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDocument {
    #[serde(default)]
    errors: Vec<ApiError>,
}

/// Errors that can occur when talking to the BattleMetrics API
#[derive(Error, Debug)]
pub enum Error {
    /// Network or connection error (DNS, TLS, timeout, aborted transfer)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Authentication or permission failure (HTTP 401/403)
    #[error("authentication failed ({status})")]
    Auth {
        /// Status code returned by the API (401 or 403).
        status: StatusCode,
        /// JSON:API error objects from the response body, if any.
        errors: Vec<ApiError>,
    },

    /// Invalid request parameters (HTTP 400)
    #[error("invalid request")]
    Validation {
        /// JSON:API error objects from the response body, if any.
        errors: Vec<ApiError>,
    },

    /// Resource not found (HTTP 404)
    #[error("resource not found")]
    NotFound {
        /// JSON:API error objects from the response body, if any.
        errors: Vec<ApiError>,
    },

    /// Rate limit still exceeded after the single built-in retry (HTTP 429)
    #[error("rate limit exceeded")]
    RateLimit {
        /// Server-requested wait before the next attempt.
        retry_after: Option<Duration>,
        /// JSON:API error objects from the response body, if any.
        errors: Vec<ApiError>,
    },

    /// Server-side failure (HTTP 5xx)
    #[error("server error ({status})")]
    Server {
        /// Status code returned by the API.
        status: StatusCode,
        /// JSON:API error objects from the response body, if any.
        errors: Vec<ApiError>,
    },

    /// Response body that does not match the JSON:API contract
    #[error("malformed response: {detail}")]
    MalformedResponse {
        /// What was wrong with the payload.
        detail: String,
        /// The offending raw payload, kept for diagnosis.
        payload: String,
    },
}

impl Error {
    /// Classify a non-success HTTP response into the error taxonomy.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let errors = parse_error_objects(body);

        match status {
            StatusCode::BAD_REQUEST => Self::Validation { errors },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Auth { status, errors },
            StatusCode::NOT_FOUND => Self::NotFound { errors },
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimit {
                retry_after: None,
                errors,
            },
            status => Self::Server { status, errors },
        }
    }

    pub(crate) fn malformed(detail: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::MalformedResponse {
            detail: detail.into(),
            payload: payload.into(),
        }
    }

    /// Returns true if this error is transient and a fresh attempt could succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::RateLimit { .. } | Self::Server { .. }
        )
    }

    /// Returns true if this error will not go away by retrying
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::Auth { .. } | Self::Validation { .. } | Self::NotFound { .. }
        )
    }

    /// JSON:API error objects attached to this error, empty when the
    /// response carried none (or the error did not come from a response).
    pub fn api_errors(&self) -> &[ApiError] {
        match self {
            Self::Auth { errors, .. }
            | Self::Validation { errors }
            | Self::NotFound { errors }
            | Self::RateLimit { errors, .. }
            | Self::Server { errors, .. } => errors,
            Self::Network(_) | Self::MalformedResponse { .. } => &[],
        }
    }
}

/// Parse the `errors` array of a JSON:API error body, empty on any mismatch.
pub(crate) fn parse_error_objects(body: &str) -> Vec<ApiError> {
    serde_json::from_str::<ErrorDocument>(body)
        .map(|document| document.errors)
        .unwrap_or_default()
}
