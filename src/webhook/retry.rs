//! Retry policy for rate-limited webhook operations.

use std::time::Duration;

/// Controls how the retrying operations wait out rate limits.
///
/// The wait before resubmitting is the server-advised `retry_after`
/// rounded up to whole milliseconds, plus a fixed safety margin. Only rate
/// limits are retried; API and transport errors are returned at once.
///
/// # Defaults
///
/// - `safety_margin`: 1 second
/// - `max_rate_limit_retries`: unbounded
///
/// # Example
///
/// ```
/// use discord_webhooks::webhook::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new()
///     .with_safety_margin(Duration::from_millis(250))
///     .with_max_rate_limit_retries(5);
///
/// assert_eq!(policy.delay_for(2.5), Duration::from_millis(2750));
/// assert!(!policy.should_retry(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra wait added on top of the advised retry-after.
    pub safety_margin: Duration,

    /// Maximum number of rate-limit retries per call.
    ///
    /// `None` retries until the request is accepted or cancelled.
    pub max_rate_limit_retries: Option<u32>,
}

impl RetryPolicy {
    /// Default safety margin (1 second).
    pub const DEFAULT_SAFETY_MARGIN: Duration = Duration::from_secs(1);

    /// Creates a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            safety_margin: Self::DEFAULT_SAFETY_MARGIN,
            max_rate_limit_retries: None,
        }
    }

    /// Sets the safety margin added to every wait.
    ///
    /// Zero is supported (useful with [`InstantSleeper`]) but Discord may
    /// reject a resubmission that arrives exactly at the advised time.
    ///
    /// [`InstantSleeper`]: crate::time::InstantSleeper
    #[must_use]
    pub const fn with_safety_margin(mut self, margin: Duration) -> Self {
        self.safety_margin = margin;
        self
    }

    /// Bounds the number of rate-limit retries per call.
    ///
    /// Once exceeded, the rate limit is surfaced as
    /// [`WebhookError::RateLimited`](super::WebhookError::RateLimited).
    #[must_use]
    pub const fn with_max_rate_limit_retries(mut self, max: u32) -> Self {
        self.max_rate_limit_retries = Some(max);
        self
    }

    /// Computes the wait for a server-advised `retry_after` in seconds.
    ///
    /// Non-finite or negative values are treated as zero.
    #[must_use]
    pub fn delay_for(&self, retry_after: f64) -> Duration {
        let millis = (retry_after * 1000.0).ceil();
        // Float-to-int casts saturate, so huge values clamp to u64::MAX.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let millis = if millis.is_finite() && millis > 0.0 {
            millis as u64
        } else {
            0
        };
        Duration::from_millis(millis).saturating_add(self.safety_margin)
    }

    /// Returns true if another retry is allowed after `retries` have been made.
    #[must_use]
    pub const fn should_retry(&self, retries: u32) -> bool {
        match self.max_rate_limit_retries {
            Some(max) => retries < max,
            None => true,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
