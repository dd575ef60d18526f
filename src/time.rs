//! Time helpers: timestamp formatting and a sleep abstraction for testability.
//!
//! This module provides:
//! - [`iso8601`] for formatting embed timestamps the way Discord expects
//! - a [`Sleeper`] trait so the rate-limit wait can be replaced in tests

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, TimeZone, Timelike};

/// Formats a timestamp as an ISO-8601 string with millisecond precision.
///
/// Sub-second precision is dropped, so the millisecond field is always `000`.
/// UTC timestamps use the `Z` suffix, other offsets use `+HH:MM`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use discord_webhooks::time::iso8601;
///
/// let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
/// assert_eq!(iso8601(&dt), "2024-05-01T12:30:45.000Z");
/// ```
#[must_use]
pub fn iso8601<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let whole_seconds = timestamp.with_nanosecond(0).unwrap_or_else(|| timestamp.clone());
    whole_seconds.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Abstraction over async sleeping.
///
/// The rate-limit retry loop waits through this trait so tests can
/// observe requested delays without actually waiting.
pub trait Sleeper: Send + Sync {
    /// Suspends the current task for the given duration.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production sleeper backed by [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately.
///
/// Useful in tests that exercise retry paths without caring about timing.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}
