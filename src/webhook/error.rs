//! Error types for HTTP and webhook operations.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level. A response with an
/// error status is not an `HttpError`; see [`WebhookError`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be converted for sending.
    ///
    /// Raised before any connection is made, e.g. for a malformed
    /// multipart content type.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Error type for webhook operations.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// Discord rejected the request with HTTP 429.
    ///
    /// Returned only by the surfacing operations; the retrying variants
    /// wait and resubmit instead.
    #[error("Rate limited, retry after {retry_after}s{}", if *global { " (global)" } else { "" })]
    RateLimited {
        /// Seconds to wait before resubmitting
        retry_after: f64,
        /// Discord error code, 0 if absent
        code: i64,
        /// Discord error message, if any
        message: Option<String>,
        /// Whether the limit applies to every route
        global: bool,
    },

    /// Discord returned a structured error (unknown message, invalid form body, ...).
    #[error("Discord API error {code} (HTTP {status}): {message}")]
    Api {
        /// Discord error code
        code: i64,
        /// Discord error message
        message: String,
        /// HTTP status of the response
        status: http::StatusCode,
    },

    /// Non-success status without a recognisable error body.
    #[error("HTTP {status}{}", body.as_deref().map(|b| format!(": {b}")).unwrap_or_default())]
    Status {
        /// HTTP status of the response
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8 and non-empty
        body: Option<String>,
    },

    /// A file-backed attachment does not exist.
    #[error("Attachment file not found: {}", path.display())]
    AttachmentNotFound {
        /// Resolved path that was looked up
        path: PathBuf,
    },

    /// A file-backed attachment exists but could not be read.
    #[error("Failed to read attachment {}: {source}", path.display())]
    AttachmentRead {
        /// Resolved path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A rate-limit retry was cancelled through its
    /// [`CancelToken`](crate::cancel::CancelToken).
    #[error("Cancelled while waiting out a rate limit of {retry_after}s")]
    Cancelled {
        /// The wait that was in progress
        retry_after: f64,
    },

    /// The message could not be serialized.
    #[error("Failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),

    /// A success response could not be decoded into a message.
    #[error("Failed to decode response: {source}")]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// The webhook URL cannot address messages.
    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(String),
}

impl WebhookError {
    /// Returns true for a surfaced HTTP 429.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Returns the advised wait for rate-limit errors.
    #[must_use]
    pub const fn retry_after(&self) -> Option<f64> {
        match self {
            Self::RateLimited { retry_after, .. } | Self::Cancelled { retry_after } => {
                Some(*retry_after)
            }
            _ => None,
        }
    }
}
