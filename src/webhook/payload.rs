//! Encoding of messages into request bodies.

use std::borrow::Cow;

use super::WebhookError;
use super::http::{FormPart, MultipartBody, RequestBody};
use crate::model::Message;

/// Multipart field carrying the message JSON.
pub const PAYLOAD_JSON_FIELD: &str = "payload_json";

/// Encodes a message into a request body.
///
/// Messages without attachments become a JSON body. Messages with
/// attachments become a multipart form: a `payload_json` part holding the
/// message JSON, followed by one `files[<id>]` part per attachment in
/// attachment order. Attachment ids are renumbered to their list position
/// if they do not already match it. File-backed attachments are read here.
///
/// # Errors
///
/// - [`WebhookError::Encode`] if the message cannot be serialized
/// - [`WebhookError::AttachmentNotFound`] / [`WebhookError::AttachmentRead`]
///   if a file-backed attachment cannot be loaded
pub async fn encode(message: &Message) -> Result<RequestBody, WebhookError> {
    let message = numbered(message);
    let json = serde_json::to_vec(&*message).map_err(WebhookError::Encode)?;

    if !message.has_attachments() {
        return Ok(RequestBody::Json(json));
    }

    let mut parts = Vec::with_capacity(message.attachments.len() + 1);
    parts.push(FormPart {
        name: PAYLOAD_JSON_FIELD.to_string(),
        filename: None,
        content_type: Some("application/json".to_string()),
        data: json,
    });

    for attachment in &message.attachments {
        let data = attachment.source.load().await?;
        tracing::debug!(
            "Encoded attachment {} as {} ({} bytes)",
            attachment.filename,
            attachment.field_name(),
            data.len()
        );
        parts.push(FormPart {
            name: attachment.field_name(),
            filename: Some(attachment.filename.clone()),
            content_type: None,
            data,
        });
    }

    Ok(RequestBody::Multipart(MultipartBody { parts }))
}

/// Returns the message with attachment ids equal to their positions.
fn numbered(message: &Message) -> Cow<'_, Message> {
    let in_order = message
        .attachments
        .iter()
        .enumerate()
        .all(|(position, attachment)| {
            attachment.id == position && !attachment.filename.is_empty()
        });
    if in_order {
        return Cow::Borrowed(message);
    }

    let mut owned = message.clone();
    for (position, attachment) in owned.attachments.iter_mut().enumerate() {
        attachment.assign_id(position);
    }
    Cow::Owned(owned)
}
