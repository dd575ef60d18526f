//! Webhook client: the four message operations and the rate-limit loop.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use url::Url;

use super::posted::{MessageResponse, PostedMessage};
use super::resolver::Rejection;
use super::{
    Channel, HttpClient, HttpRequest, HttpResponse, ReqwestClient, RetryPolicy, WebhookError,
    payload,
};
use crate::cancel::CancelToken;
use crate::model::Message;
use crate::time::{Sleeper, TokioSleeper};

/// Details passed to the rate-limit hook.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitEvent<'a> {
    /// The message being sent, `None` for deletes.
    pub message: Option<&'a Message>,
    /// The webhook that was throttled.
    pub webhook_url: &'a Url,
    /// Seconds Discord asked to wait.
    pub retry_after: f64,
}

/// Callback invoked whenever Discord reports a rate limit.
pub type RateLimitHook = Arc<dyn Fn(&RateLimitEvent<'_>) + Send + Sync>;

/// How a rate limit is handled by one call.
#[derive(Clone, Copy)]
enum Policy<'a> {
    /// Fail with [`WebhookError::RateLimited`].
    Surface,
    /// Wait, check the token, resubmit.
    Retry(&'a CancelToken),
}

/// Sends messages through Discord webhooks.
///
/// Every operation comes in two flavours. The plain ones (`fire`, `post`,
/// `edit`, `delete`) return [`WebhookError::RateLimited`] when throttled.
/// The `_with_retry` ones wait out the advised delay plus the policy's
/// safety margin and resubmit the same request until it is accepted,
/// the [`CancelToken`] is cancelled, or the policy's retry bound is hit.
///
/// The client holds no mutable state; share it by reference or clone it.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
/// - `S`: The sleeper used for rate-limit waits (defaults to [`TokioSleeper`])
///
/// # Example
///
/// ```no_run
/// use discord_webhooks::model::Message;
/// use discord_webhooks::webhook::{Channel, ReqwestClient, WebhookClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WebhookClient::new(ReqwestClient::new());
/// let channel = Channel::parse("https://discord.com/api/webhooks/1/token")?;
///
/// let posted = client.post(&channel, &Message::text("deploy finished")).await?;
/// println!("posted message {}", posted.id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WebhookClient<H = ReqwestClient, S = TokioSleeper> {
    http: H,
    sleeper: S,
    retry_policy: RetryPolicy,
    rate_limit_hook: Option<RateLimitHook>,
}

impl<H> WebhookClient<H, TokioSleeper> {
    /// Creates a client with the default retry policy and [`TokioSleeper`].
    #[must_use]
    pub fn new(http: H) -> Self {
        Self {
            http,
            sleeper: TokioSleeper,
            retry_policy: RetryPolicy::default(),
            rate_limit_hook: None,
        }
    }
}

impl<H, S> WebhookClient<H, S> {
    /// Sets a custom sleeper for rate-limit waits.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> WebhookClient<H, S2> {
        WebhookClient {
            http: self.http,
            sleeper,
            retry_policy: self.retry_policy,
            rate_limit_hook: self.rate_limit_hook,
        }
    }

    /// Sets the retry policy.
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Registers a callback invoked on every rate limit, before any wait.
    #[must_use]
    pub fn with_rate_limit_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&RateLimitEvent<'_>) + Send + Sync + 'static,
    {
        self.rate_limit_hook = Some(Arc::new(hook));
        self
    }

    /// Returns the configured retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http(&self) -> &H {
        &self.http
    }
}

impl<H, S: fmt::Debug> fmt::Debug for WebhookClient<H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookClient")
            .field("sleeper", &self.sleeper)
            .field("retry_policy", &self.retry_policy)
            .field("rate_limit_hook", &self.rate_limit_hook.is_some())
            .finish_non_exhaustive()
    }
}

impl<H: HttpClient, S: Sleeper> WebhookClient<H, S> {
    /// Sends a message without waiting for Discord to return it.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] if the message cannot be encoded, the
    /// request fails, or Discord rejects it (including rate limits).
    pub async fn fire(&self, channel: &Channel, message: &Message) -> Result<(), WebhookError> {
        self.fire_with(channel, message, Policy::Surface).await
    }

    /// Like [`fire`](Self::fire), but waits out rate limits and resubmits.
    ///
    /// # Errors
    ///
    /// As [`fire`](Self::fire), except rate limits produce
    /// [`WebhookError::Cancelled`] when `cancel` fires during a wait, or
    /// [`WebhookError::RateLimited`] once the retry bound is exhausted.
    pub async fn fire_with_retry(
        &self,
        channel: &Channel,
        message: &Message,
        cancel: &CancelToken,
    ) -> Result<(), WebhookError> {
        self.fire_with(channel, message, Policy::Retry(cancel)).await
    }

    /// Sends a message and returns it as stored by Discord.
    ///
    /// When the message creates a forum thread (`thread_name` set on a
    /// base channel), the returned [`PostedMessage::channel`] targets the
    /// new thread.
    ///
    /// # Errors
    ///
    /// As [`fire`](Self::fire), plus [`WebhookError::Decode`] if the
    /// response body is not a message.
    pub async fn post(
        &self,
        channel: &Channel,
        message: &Message,
    ) -> Result<PostedMessage, WebhookError> {
        self.post_with(channel, message, Policy::Surface).await
    }

    /// Like [`post`](Self::post), but waits out rate limits and resubmits.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post) and [`fire_with_retry`](Self::fire_with_retry).
    pub async fn post_with_retry(
        &self,
        channel: &Channel,
        message: &Message,
        cancel: &CancelToken,
    ) -> Result<PostedMessage, WebhookError> {
        self.post_with(channel, message, Policy::Retry(cancel)).await
    }

    /// Replaces the content of a previously sent message.
    ///
    /// Discord ignores `username`, `avatar_url` and `thread_name` on edits.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post).
    pub async fn edit(
        &self,
        channel: &Channel,
        message_id: u64,
        message: &Message,
    ) -> Result<PostedMessage, WebhookError> {
        self.edit_with(channel, message_id, message, Policy::Surface)
            .await
    }

    /// Like [`edit`](Self::edit), but waits out rate limits and resubmits.
    ///
    /// # Errors
    ///
    /// See [`post`](Self::post) and [`fire_with_retry`](Self::fire_with_retry).
    pub async fn edit_with_retry(
        &self,
        channel: &Channel,
        message_id: u64,
        message: &Message,
        cancel: &CancelToken,
    ) -> Result<PostedMessage, WebhookError> {
        self.edit_with(channel, message_id, message, Policy::Retry(cancel))
            .await
    }

    /// Deletes a previously sent message.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Api`] with "Unknown Message" if the message
    /// does not exist, and the usual transport and rate-limit errors.
    pub async fn delete(&self, channel: &Channel, message_id: u64) -> Result<(), WebhookError> {
        self.delete_with(channel, message_id, Policy::Surface).await
    }

    /// Like [`delete`](Self::delete), but waits out rate limits and resubmits.
    ///
    /// # Errors
    ///
    /// See [`delete`](Self::delete) and [`fire_with_retry`](Self::fire_with_retry).
    pub async fn delete_with_retry(
        &self,
        channel: &Channel,
        message_id: u64,
        cancel: &CancelToken,
    ) -> Result<(), WebhookError> {
        self.delete_with(channel, message_id, Policy::Retry(cancel))
            .await
    }

    async fn fire_with(
        &self,
        channel: &Channel,
        message: &Message,
        policy: Policy<'_>,
    ) -> Result<(), WebhookError> {
        let url = channel.endpoint(None, false)?;
        let request = message_request(HttpRequest::post(url), channel, message).await?;
        self.dispatch(&request, channel, Some(message), policy)
            .await?;
        Ok(())
    }

    async fn post_with(
        &self,
        channel: &Channel,
        message: &Message,
        policy: Policy<'_>,
    ) -> Result<PostedMessage, WebhookError> {
        let url = channel.endpoint(None, true)?;
        let request = message_request(HttpRequest::post(url), channel, message).await?;
        let response = self
            .dispatch(&request, channel, Some(message), policy)
            .await?;
        let decoded = MessageResponse::decode(&response)?;

        let creates_thread = !channel.is_thread()
            && message
                .thread_name
                .as_deref()
                .is_some_and(|name| !name.is_empty());
        let thread_id = if channel.is_thread() || creates_thread {
            decoded.channel_id
        } else {
            0
        };

        Ok(PostedMessage::from_response(
            decoded,
            channel.clone().with_thread(thread_id),
        ))
    }

    async fn edit_with(
        &self,
        channel: &Channel,
        message_id: u64,
        message: &Message,
        policy: Policy<'_>,
    ) -> Result<PostedMessage, WebhookError> {
        let url = channel.endpoint(Some(message_id), true)?;
        let request = message_request(HttpRequest::patch(url), channel, message).await?;
        let response = self
            .dispatch(&request, channel, Some(message), policy)
            .await?;
        let decoded = MessageResponse::decode(&response)?;
        Ok(PostedMessage::from_response(decoded, channel.clone()))
    }

    async fn delete_with(
        &self,
        channel: &Channel,
        message_id: u64,
        policy: Policy<'_>,
    ) -> Result<(), WebhookError> {
        let url = channel.endpoint(Some(message_id), false)?;
        self.dispatch(&HttpRequest::delete(url), channel, None, policy)
            .await?;
        Ok(())
    }

    /// Sends the request, resubmitting a clone after each rate-limit wait
    /// when the policy allows it.
    async fn dispatch(
        &self,
        request: &HttpRequest,
        channel: &Channel,
        message: Option<&Message>,
        policy: Policy<'_>,
    ) -> Result<HttpResponse, WebhookError> {
        let mut retries = 0;

        loop {
            tracing::debug!("{} {channel} (attempt {})", request.method, retries + 1);
            let response = self.http.request(request.clone()).await?;

            let Some(rejection) = Rejection::from_response(&response) else {
                return Ok(response);
            };

            let Some(retry_after) = rejection.retry_after() else {
                tracing::debug!("{} {channel} rejected: {:?}", request.method, rejection);
                return Err(rejection.into());
            };

            self.notify_rate_limit(message, channel.webhook_url(), retry_after);

            let Policy::Retry(cancel) = policy else {
                return Err(rejection.into());
            };

            if !self.retry_policy.should_retry(retries) {
                tracing::warn!("Rate limited on {channel} after {retries} retries, giving up");
                return Err(rejection.into());
            }

            let delay = self.retry_policy.delay_for(retry_after);
            tracing::warn!(
                "Rate limited on {channel}, resubmitting in {}ms",
                delay.as_millis()
            );
            self.sleeper.sleep(delay).await;

            if cancel.is_cancelled() {
                tracing::debug!("Rate-limit retry on {channel} cancelled");
                return Err(WebhookError::Cancelled { retry_after });
            }

            retries += 1;
        }
    }

    fn notify_rate_limit(&self, message: Option<&Message>, webhook_url: &Url, retry_after: f64) {
        if let Some(hook) = &self.rate_limit_hook {
            hook(&RateLimitEvent {
                message,
                webhook_url,
                retry_after,
            });
        }
    }
}

/// Builds a request carrying the encoded message.
///
/// `thread_name` is dropped when targeting an existing thread.
async fn message_request(
    request: HttpRequest,
    channel: &Channel,
    message: &Message,
) -> Result<HttpRequest, WebhookError> {
    let outgoing = if channel.is_thread() && message.thread_name.is_some() {
        let mut owned = message.clone();
        owned.thread_name = None;
        Cow::Owned(owned)
    } else {
        Cow::Borrowed(message)
    };

    let body = payload::encode(&outgoing).await?;
    Ok(request.with_body(body))
}
