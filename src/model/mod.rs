//! Message model for webhook payloads.
//!
//! This module provides:
//! - Outbound messages and mention controls ([`Message`], [`AllowedMentions`])
//! - Rich embeds and their fluent builder ([`Embed`], [`EmbedBuilder`])
//! - File uploads ([`Attachment`], [`AttachmentSource`])
//! - Embed colours with the CSS/X11 name table ([`EmbedColor`])

mod attachment;
mod color;
mod embed;
mod message;
pub mod snowflake;

#[cfg(test)]
mod color_tests;

pub use attachment::{Attachment, AttachmentSource, ImageFormat};
pub use color::{EmbedColor, NAMED_COLORS, ParseColorError};
pub use embed::{Embed, EmbedAuthor, EmbedBuilder, EmbedField, EmbedFooter, EmbedImage};
pub use message::{AllowedMentions, Mentionable, Message};
