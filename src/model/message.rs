//! Outbound webhook messages.

use serde::{Deserialize, Serialize};

use super::{Attachment, Embed, EmbedBuilder, snowflake};

/// A message to execute through a webhook.
///
/// `content`, `embeds` and `tts` are always serialized; every other unset
/// field is omitted, as are empty attachment lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Overrides the webhook's default username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Overrides the webhook's default avatar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Text content (up to 2000 characters).
    pub content: Option<String>,

    /// Rich embeds (up to 10).
    pub embeds: Vec<Embed>,

    /// Read the message aloud with text-to-speech.
    pub tts: bool,

    /// Creates a forum thread with this name.
    ///
    /// Cleared from the payload when the target channel is already a thread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,

    /// Restricts which mentions notify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,

    /// Files uploaded with the message.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a message with text content.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::default().with_content(content)
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Overrides the webhook username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Overrides the webhook avatar.
    #[must_use]
    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Enables or disables text-to-speech.
    #[must_use]
    pub const fn with_tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    /// Creates a forum thread with the given name when posted.
    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = Some(name.into());
        self
    }

    /// Restricts which mentions notify.
    #[must_use]
    pub fn with_allowed_mentions(mut self, allowed: AllowedMentions) -> Self {
        self.allowed_mentions = Some(allowed);
        self
    }

    /// Appends a finished embed.
    #[must_use]
    pub fn with_embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Starts an embed bound to this message.
    ///
    /// [`EmbedBuilder::finish`] appends the embed and hands the message back.
    pub const fn embed(self) -> EmbedBuilder {
        EmbedBuilder::bound(self)
    }

    /// Appends an attachment, assigning its id from its position.
    #[must_use]
    pub fn with_attachment(mut self, mut attachment: Attachment) -> Self {
        attachment.assign_id(self.attachments.len());
        self.attachments.push(attachment);
        self
    }

    /// Returns `true` if the message carries files and must be sent as multipart.
    #[must_use]
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

impl From<&str> for Message {
    fn from(content: &str) -> Self {
        Self::text(content)
    }
}

impl From<String> for Message {
    fn from(content: String) -> Self {
        Self::text(content)
    }
}

impl From<Embed> for Message {
    fn from(embed: Embed) -> Self {
        Self::default().with_embed(embed)
    }
}

/// Mention categories that may be parsed from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mentionable {
    /// `<@&id>` role mentions
    Roles,
    /// `<@id>` user mentions
    Users,
    /// `@everyone` and `@here`
    Everyone,
}

/// Controls which mentions in a message notify their targets.
///
/// The default value suppresses every mention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedMentions {
    /// Categories parsed from content.
    #[serde(default)]
    pub parse: Vec<Mentionable>,

    /// Roles that may be mentioned.
    #[serde(default, with = "snowflake::list", skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<u64>,

    /// Users that may be mentioned.
    #[serde(default, with = "snowflake::list", skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<u64>,

    /// Whether a reply pings the replied-to author.
    #[serde(default)]
    pub replied_user: bool,
}

impl AllowedMentions {
    /// Suppresses all mentions.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Parses every mention category from content.
    #[must_use]
    pub fn all() -> Self {
        Self {
            parse: vec![Mentionable::Roles, Mentionable::Users, Mentionable::Everyone],
            ..Self::default()
        }
    }

    /// Adds a category parsed from content.
    #[must_use]
    pub fn with_parse(mut self, kind: Mentionable) -> Self {
        if !self.parse.contains(&kind) {
            self.parse.push(kind);
        }
        self
    }

    /// Allows a specific role to be pinged.
    #[must_use]
    pub fn with_role(mut self, role_id: u64) -> Self {
        self.roles.push(role_id);
        self
    }

    /// Allows a specific user to be pinged.
    #[must_use]
    pub fn with_user(mut self, user_id: u64) -> Self {
        self.users.push(user_id);
        self
    }

    /// Enables or disables pinging the replied-to author.
    #[must_use]
    pub const fn with_replied_user(mut self, replied_user: bool) -> Self {
        self.replied_user = replied_user;
        self
    }
}
