//! Discord webhook client.
//!
//! Builds messages with embeds and file attachments, delivers them to a
//! Discord webhook (optionally inside a forum thread), and handles Discord's
//! rate limiting either by surfacing it to the caller or by waiting and
//! retrying until the request is accepted.
//!
//! ```no_run
//! use discord_webhooks::model::{EmbedColor, Message};
//! use discord_webhooks::webhook::{Channel, ReqwestClient, WebhookClient};
//!
//! # async fn demo() -> Result<(), discord_webhooks::webhook::WebhookError> {
//! let channel = Channel::parse("https://discord.com/api/webhooks/123/token")?;
//! let client = WebhookClient::new(ReqwestClient::new());
//!
//! let message = Message::text("Deploy finished")
//!     .embed()
//!     .with_title("build #42")
//!     .with_color(EmbedColor::new(87, 242, 135))
//!     .finish();
//!
//! let posted = client.post(&channel, &message).await?;
//! posted.delete(&client).await?;
//! # Ok(())
//! # }
//! ```

pub mod cancel;
pub mod config;
pub mod markdown;
pub mod model;
mod path;
pub mod time;
pub mod webhook;
