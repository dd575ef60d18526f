//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default HTTP request timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default pause added on top of Discord's `retry_after`, in milliseconds.
pub const RATE_LIMIT_SAFETY_MARGIN_MS: u64 = 1000;

/// Default `User-Agent` header.
pub const USER_AGENT: &str = concat!(
    "DiscordBot (",
    env!("CARGO_PKG_NAME"),
    ", ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Default HTTP request timeout as Duration.
#[must_use]
pub const fn http_timeout() -> Duration {
    Duration::from_secs(HTTP_TIMEOUT_SECS)
}

/// Default rate-limit safety margin as Duration.
#[must_use]
pub const fn rate_limit_safety_margin() -> Duration {
    Duration::from_millis(RATE_LIMIT_SAFETY_MARGIN_MS)
}
