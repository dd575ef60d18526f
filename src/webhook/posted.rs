//! Messages returned by Discord after a post or edit.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Channel, HttpClient, HttpResponse, WebhookClient, WebhookError};
use crate::cancel::CancelToken;
use crate::model::{Embed, Message, snowflake};
use crate::time::Sleeper;

/// Author of a posted message, as reported by Discord.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseAuthor {
    /// Author id (the webhook id for webhook messages)
    #[serde(with = "snowflake")]
    pub id: u64,
    /// Display name used for the message
    pub username: String,
    /// Avatar hash, if any
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Message body returned by `?wait=true` posts and by edits.
#[derive(Debug, Deserialize)]
pub(super) struct MessageResponse {
    #[serde(with = "snowflake")]
    pub(super) id: u64,
    #[serde(rename = "type", default)]
    kind: u32,
    #[serde(default)]
    content: String,
    #[serde(with = "snowflake")]
    pub(super) channel_id: u64,
    author: ResponseAuthor,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    edited_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    mention_everyone: bool,
    #[serde(default)]
    pinned: bool,
    #[serde(default)]
    position: Option<i64>,
    #[serde(default)]
    tts: bool,
    #[serde(default, with = "snowflake::option")]
    webhook_id: Option<u64>,
    #[serde(default)]
    embeds: Vec<Embed>,
}

impl MessageResponse {
    pub(super) fn decode(response: &HttpResponse) -> Result<Self, WebhookError> {
        serde_json::from_slice(&response.body).map_err(|source| WebhookError::Decode {
            source,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        })
    }
}

/// A message stored by Discord.
///
/// Returned by [`WebhookClient::post`] and [`WebhookClient::edit`]. The
/// [`channel`](Self::channel) handle routes follow-up edits and deletes to
/// the same webhook and thread.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedMessage {
    /// Where the message lives.
    pub channel: Channel,
    /// Message id.
    pub id: u64,
    /// Discord message type (0 for a default message).
    pub kind: u32,
    /// Text content.
    pub content: String,
    /// Channel or thread the message was posted in.
    pub channel_id: u64,
    /// Author as shown in the client.
    pub author: ResponseAuthor,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Last edit time.
    pub edited: Option<DateTime<Utc>>,
    /// Whether the message pings `@everyone`.
    pub mention_everyone: bool,
    /// Whether the message is pinned.
    pub pinned: bool,
    /// Approximate position in a thread.
    pub position: Option<i64>,
    /// Whether the message was sent as text-to-speech.
    pub tts: bool,
    /// Id of the webhook that sent the message.
    pub webhook_id: Option<u64>,
    /// Embeds as stored by Discord.
    pub embeds: Vec<Embed>,
}

impl PostedMessage {
    pub(super) fn from_response(response: MessageResponse, channel: Channel) -> Self {
        Self {
            channel,
            id: response.id,
            kind: response.kind,
            content: response.content,
            channel_id: response.channel_id,
            author: response.author,
            created: response.timestamp,
            edited: response.edited_timestamp,
            mention_everyone: response.mention_everyone,
            pinned: response.pinned,
            position: response.position,
            tts: response.tts,
            webhook_id: response.webhook_id,
            embeds: response.embeds,
        }
    }

    /// Replaces this message's content and refreshes the local copy.
    ///
    /// `id` and `channel` are kept; the other fields take the values
    /// Discord returns.
    ///
    /// # Errors
    ///
    /// See [`WebhookClient::edit`]. On error the local copy is unchanged.
    pub async fn edit<H: HttpClient, S: Sleeper>(
        &mut self,
        client: &WebhookClient<H, S>,
        message: &Message,
    ) -> Result<(), WebhookError> {
        let updated = client.edit(&self.channel, self.id, message).await?;
        self.refresh(updated);
        Ok(())
    }

    /// Like [`edit`](Self::edit), but waits out rate limits and resubmits.
    ///
    /// # Errors
    ///
    /// See [`WebhookClient::edit_with_retry`].
    pub async fn edit_with_retry<H: HttpClient, S: Sleeper>(
        &mut self,
        client: &WebhookClient<H, S>,
        message: &Message,
        cancel: &CancelToken,
    ) -> Result<(), WebhookError> {
        let updated = client
            .edit_with_retry(&self.channel, self.id, message, cancel)
            .await?;
        self.refresh(updated);
        Ok(())
    }

    /// Deletes this message.
    ///
    /// # Errors
    ///
    /// See [`WebhookClient::delete`].
    pub async fn delete<H: HttpClient, S: Sleeper>(
        &self,
        client: &WebhookClient<H, S>,
    ) -> Result<(), WebhookError> {
        client.delete(&self.channel, self.id).await
    }

    /// Like [`delete`](Self::delete), but waits out rate limits and resubmits.
    ///
    /// # Errors
    ///
    /// See [`WebhookClient::delete_with_retry`].
    pub async fn delete_with_retry<H: HttpClient, S: Sleeper>(
        &self,
        client: &WebhookClient<H, S>,
        cancel: &CancelToken,
    ) -> Result<(), WebhookError> {
        client
            .delete_with_retry(&self.channel, self.id, cancel)
            .await
    }

    fn refresh(&mut self, updated: Self) {
        self.kind = updated.kind;
        self.content = updated.content;
        self.author = updated.author;
        self.edited = updated.edited;
        self.mention_everyone = updated.mention_everyone;
        self.pinned = updated.pinned;
        self.position = updated.position;
        self.tts = updated.tts;
        self.embeds = updated.embeds;
    }
}
