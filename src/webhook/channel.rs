//! Webhook target: URL plus optional forum thread.

use std::fmt;

use url::Url;

use super::WebhookError;

/// Where webhook messages are delivered.
///
/// A plain value: the webhook URL and a thread id, where `0` targets the
/// webhook's base channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Channel {
    webhook_url: Url,
    thread_id: u64,
}

impl Channel {
    /// Targets the webhook's base channel.
    #[must_use]
    pub const fn new(webhook_url: Url) -> Self {
        Self {
            webhook_url,
            thread_id: 0,
        }
    }

    /// Parses a webhook URL.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidUrl`] if `url` is not an absolute
    /// URL with a path.
    pub fn parse(url: &str) -> Result<Self, WebhookError> {
        let parsed =
            Url::parse(url).map_err(|e| WebhookError::InvalidUrl(format!("{url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(WebhookError::InvalidUrl(url.to_string()));
        }
        Ok(Self::new(parsed))
    }

    /// Targets a thread inside the webhook's forum channel.
    #[must_use]
    pub const fn with_thread(mut self, thread_id: u64) -> Self {
        self.thread_id = thread_id;
        self
    }

    /// The webhook URL.
    #[must_use]
    pub const fn webhook_url(&self) -> &Url {
        &self.webhook_url
    }

    /// The thread id, `0` for the base channel.
    #[must_use]
    pub const fn thread_id(&self) -> u64 {
        self.thread_id
    }

    /// Returns true if this channel targets an existing thread.
    #[must_use]
    pub const fn is_thread(&self) -> bool {
        self.thread_id != 0
    }

    /// Builds the request URL for an operation.
    ///
    /// `message_id` appends `/messages/<id>`; `wait` adds `wait=true`;
    /// a thread adds `thread_id=<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidUrl`] if the webhook URL cannot
    /// carry path segments.
    pub fn endpoint(&self, message_id: Option<u64>, wait: bool) -> Result<Url, WebhookError> {
        let mut url = self.webhook_url.clone();

        if let Some(id) = message_id {
            url.path_segments_mut()
                .map_err(|()| WebhookError::InvalidUrl(self.webhook_url.to_string()))?
                .pop_if_empty()
                .push("messages")
                .push(&id.to_string());
        }

        if wait || self.is_thread() {
            let mut query = url.query_pairs_mut();
            if wait {
                query.append_pair("wait", "true");
            }
            if self.is_thread() {
                query.append_pair("thread_id", &self.thread_id.to_string());
            }
        }

        Ok(url)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The URL path carries the webhook token; show only the id segment.
        let id = self
            .webhook_url
            .path_segments()
            .and_then(|mut segments| segments.find(|s| is_snowflake(s)))
            .unwrap_or("?");
        write!(f, "webhook {id}")?;
        if self.is_thread() {
            write!(f, " thread {}", self.thread_id)?;
        }
        Ok(())
    }
}

fn is_snowflake(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
