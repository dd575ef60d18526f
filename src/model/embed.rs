//! Rich embeds and the embed builder.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::{Attachment, EmbedColor, Message};
use crate::time::iso8601;

/// A rich embed shown below the message content.
///
/// Unset fields are omitted from the JSON payload. Discord echoes embeds
/// back in message responses, so the type also deserializes; response-only
/// fields such as image dimensions are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    /// Packed RGB colour of the left border.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<i32>,

    /// Author block shown above the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,

    /// Embed title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Hyperlink applied to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Main body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Name/value fields in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,

    /// Large image below the fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,

    /// Small image in the top-right corner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedImage>,

    /// Footer line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,

    /// ISO-8601 timestamp shown next to the footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Embed {
    /// Starts a standalone embed builder.
    ///
    /// [`EmbedBuilder::finish`] wraps the embed in a new [`Message`].
    #[must_use]
    pub fn builder() -> EmbedBuilder {
        EmbedBuilder {
            parent: None,
            embed: Self::default(),
        }
    }

    /// Returns the border colour, if set.
    #[must_use]
    pub fn color(&self) -> Option<EmbedColor> {
        self.color.map(EmbedColor::from_packed)
    }
}

/// Author block of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    /// Display name
    pub name: String,
    /// Link applied to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Small avatar shown next to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// A name/value pair displayed in an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    /// Field heading
    pub name: String,
    /// Field body
    pub value: String,
    /// Whether the field shares a row with its neighbours
    #[serde(default)]
    pub inline: bool,
}

/// Image or thumbnail reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    /// Image URL, either remote or `attachment://<filename>`
    pub url: String,
}

/// Footer line of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    /// Footer text
    pub text: String,
    /// Small icon shown before the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Fluent builder for an [`Embed`].
///
/// A builder is either bound to a parent message (from [`Message::embed`])
/// or standalone (from [`Embed::builder`]). [`finish`](Self::finish)
/// appends the embed to the parent and returns it; a standalone builder
/// creates a fresh message on demand. Image helpers that upload bytes add
/// the attachment to that same parent.
///
/// The builder mutates its own state; share the finished [`Message`], not
/// the builder, across threads.
#[derive(Debug, Clone)]
#[must_use = "call `finish` to obtain the message"]
pub struct EmbedBuilder {
    parent: Option<Message>,
    embed: Embed,
}

impl EmbedBuilder {
    pub(super) const fn bound(parent: Message) -> Self {
        Self {
            parent: Some(parent),
            embed: Embed {
                color: None,
                author: None,
                title: None,
                url: None,
                description: None,
                fields: Vec::new(),
                image: None,
                thumbnail: None,
                footer: None,
                timestamp: None,
            },
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.embed.title = Some(title.into());
        self
    }

    /// Sets the title hyperlink.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.embed.url = Some(url.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.embed.description = Some(description.into());
        self
    }

    /// Sets the border colour.
    pub fn with_color(mut self, color: impl Into<EmbedColor>) -> Self {
        self.embed.color = Some(color.into().packed());
        self
    }

    /// Sets the timestamp shown in the footer area.
    pub fn with_timestamp<Tz>(mut self, timestamp: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.embed.timestamp = Some(iso8601(timestamp));
        self
    }

    /// Appends a field.
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.embed.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Sets the author block.
    pub fn with_author(
        mut self,
        name: impl Into<String>,
        url: Option<String>,
        icon_url: Option<String>,
    ) -> Self {
        self.embed.author = Some(EmbedAuthor {
            name: name.into(),
            url,
            icon_url,
        });
        self
    }

    /// Sets the footer.
    pub fn with_footer(mut self, text: impl Into<String>, icon_url: Option<String>) -> Self {
        self.embed.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url,
        });
        self
    }

    /// Sets the large image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.embed.image = Some(EmbedImage { url: url.into() });
        self
    }

    /// Sets the thumbnail URL.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.embed.thumbnail = Some(EmbedImage { url: url.into() });
        self
    }

    /// Uploads `attachment` with the message and uses it as the large image.
    pub fn with_image_attachment(mut self, attachment: Attachment) -> Self {
        let url = self.attach(attachment);
        self.embed.image = Some(EmbedImage { url });
        self
    }

    /// Uploads `attachment` with the message and uses it as the thumbnail.
    pub fn with_thumbnail_attachment(mut self, attachment: Attachment) -> Self {
        let url = self.attach(attachment);
        self.embed.thumbnail = Some(EmbedImage { url });
        self
    }

    /// Sets the footer, uploading `attachment` with the message as its icon.
    ///
    /// Replaces any existing footer. Discord rejects footers without text.
    pub fn with_footer_icon_attachment(
        mut self,
        text: impl Into<String>,
        attachment: Attachment,
    ) -> Self {
        let url = self.attach(attachment);
        self.embed.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url: Some(url),
        });
        self
    }

    /// Adds an attachment to the parent message, returning its `attachment://` URL.
    fn attach(&mut self, attachment: Attachment) -> String {
        let parent = self.parent.take().unwrap_or_default();
        let parent = parent.with_attachment(attachment);
        let url = parent
            .attachments
            .last()
            .map(Attachment::url)
            .unwrap_or_default();
        self.parent = Some(parent);
        url
    }

    /// Returns the embed built so far.
    #[must_use]
    pub const fn embed(&self) -> &Embed {
        &self.embed
    }

    /// Appends the embed to its parent message and returns the message.
    ///
    /// A standalone builder wraps the embed in a new default [`Message`].
    #[must_use]
    pub fn finish(self) -> Message {
        let mut parent = self.parent.unwrap_or_default();
        parent.embeds.push(self.embed);
        parent
    }

    /// Returns the embed without a parent message.
    ///
    /// Attachments added through the image helpers are discarded.
    #[must_use]
    pub fn build(self) -> Embed {
        self.embed
    }
}
