//! Classification of non-success responses.

use serde::Deserialize;

use super::{HttpResponse, WebhookError};

/// Error body returned by Discord on non-success responses.
///
/// Every field is optional on the wire; missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatusPayload {
    /// Discord error code (0 when absent)
    pub code: i64,
    /// Human-readable error message
    pub message: Option<String>,
    /// Seconds to wait before retrying
    pub retry_after: Option<f64>,
    /// Whether a rate limit is global
    pub global: bool,
}

impl StatusPayload {
    /// Decodes the body, falling back to an empty payload for non-JSON bodies.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Why Discord did not accept a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// A positive retry-after was advised.
    RateLimited {
        /// Seconds to wait before resubmitting
        retry_after: f64,
        /// Discord error code
        code: i64,
        /// Discord error message
        message: Option<String>,
        /// Whether the limit is global
        global: bool,
    },
    /// A structured Discord error.
    Api {
        /// Discord error code
        code: i64,
        /// Discord error message
        message: String,
        /// HTTP status
        status: http::StatusCode,
    },
    /// Non-success status without an error message.
    Status {
        /// HTTP status
        status: http::StatusCode,
        /// Raw body text, if any
        body: Option<String>,
    },
}

impl Rejection {
    /// Classifies a response. Returns `None` for 2xx responses.
    ///
    /// A positive `retry_after` in the body wins over everything else. For
    /// HTTP 429 without one, the `Retry-After` header is consulted.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Option<Self> {
        if response.is_success() {
            return None;
        }

        let payload = StatusPayload::from_body(&response.body);
        let retry_after = payload
            .retry_after
            .filter(|secs| *secs > 0.0)
            .or_else(|| header_retry_after(response));

        if let Some(retry_after) = retry_after {
            return Some(Self::RateLimited {
                retry_after,
                code: payload.code,
                message: payload.message,
                global: payload.global,
            });
        }

        if let Some(message) = payload.message {
            return Some(Self::Api {
                code: payload.code,
                message,
                status: response.status,
            });
        }

        Some(Self::Status {
            status: response.status,
            body: response
                .body_text()
                .filter(|text| !text.is_empty())
                .map(str::to_string),
        })
    }

    /// Returns the advised wait, if this is a rate limit.
    #[must_use]
    pub const fn retry_after(&self) -> Option<f64> {
        match self {
            Self::RateLimited { retry_after, .. } => Some(*retry_after),
            Self::Api { .. } | Self::Status { .. } => None,
        }
    }
}

impl From<Rejection> for WebhookError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::RateLimited {
                retry_after,
                code,
                message,
                global,
            } => Self::RateLimited {
                retry_after,
                code,
                message,
                global,
            },
            Rejection::Api {
                code,
                message,
                status,
            } => Self::Api {
                code,
                message,
                status,
            },
            Rejection::Status { status, body } => Self::Status { status, body },
        }
    }
}

fn header_retry_after(response: &HttpResponse) -> Option<f64> {
    if response.status != http::StatusCode::TOO_MANY_REQUESTS {
        return None;
    }
    response
        .headers
        .get(http::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| *secs > 0.0)
}
