//! File attachments and their content sources.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::path::expand_tilde;
use crate::webhook::WebhookError;

/// Where an attachment's bytes come from.
///
/// Both variants share a single capability, [`AttachmentSource::load`],
/// which produces the content when the request is encoded. File-backed
/// sources are therefore read at send time, not at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentSource {
    /// Content read from a file when the message is sent.
    ///
    /// A leading `~` is expanded to the home directory.
    File(PathBuf),
    /// In-memory content.
    Buffer(Vec<u8>),
}

impl AttachmentSource {
    /// Produces the attachment content.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::AttachmentNotFound`] if a file-backed path does not exist
    /// - [`WebhookError::AttachmentRead`] if the file exists but cannot be read
    pub async fn load(&self) -> Result<Vec<u8>, WebhookError> {
        match self {
            Self::Buffer(bytes) => Ok(bytes.clone()),
            Self::File(path) => {
                let resolved = expand_tilde(path);
                tokio::fs::read(&resolved).await.map_err(|e| {
                    if e.kind() == ErrorKind::NotFound {
                        WebhookError::AttachmentNotFound { path: resolved }
                    } else {
                        WebhookError::AttachmentRead {
                            path: resolved,
                            source: e,
                        }
                    }
                })
            }
        }
    }

    /// Returns the final path component of a file-backed source.
    fn file_name(&self) -> Option<String> {
        match self {
            Self::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            Self::Buffer(_) => None,
        }
    }
}

/// A file uploaded alongside a message.
///
/// Only the metadata (`id`, `filename`, `description`) is part of the
/// message JSON; the content travels as a separate multipart part named
/// `files[<id>]`. Ids are assigned by
/// [`Message::with_attachment`](super::Message::with_attachment) and match
/// the attachment's position in the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Index linking the JSON metadata to its multipart part.
    pub id: usize,

    /// Display filename (not the source path).
    pub filename: String,

    /// Alt text for screen readers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Content source, resolved at send time.
    #[serde(skip)]
    pub source: AttachmentSource,
}

impl Attachment {
    /// Creates an attachment from in-memory bytes.
    ///
    /// The id is assigned when the attachment is added to a message.
    #[must_use]
    pub fn from_bytes(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            id: 0,
            filename: filename.into(),
            description: None,
            source: AttachmentSource::Buffer(bytes.into()),
        }
    }

    /// Creates an attachment read from `path` when the message is sent.
    ///
    /// The display filename defaults to the last component of the path.
    #[must_use]
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let source = AttachmentSource::File(path.as_ref().to_path_buf());
        let filename = source.file_name().unwrap_or_else(|| "file".to_string());
        Self {
            id: 0,
            filename,
            description: None,
            source,
        }
    }

    /// Creates an image attachment from bytes without a filename.
    ///
    /// When added to a message it is named `image<id>.<ext>`, with the
    /// extension picked from the detected [`ImageFormat`].
    #[must_use]
    pub fn image(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            id: 0,
            filename: String::new(),
            description: None,
            source: AttachmentSource::Buffer(bytes.into()),
        }
    }

    /// Assigns the id and fills in a generated filename if none is set.
    pub(crate) fn assign_id(&mut self, id: usize) {
        self.id = id;
        if !self.filename.is_empty() {
            return;
        }
        self.filename = match &self.source {
            AttachmentSource::Buffer(bytes) => {
                format!("image{id}.{}", ImageFormat::detect(bytes).extension())
            }
            AttachmentSource::File(_) => self
                .source
                .file_name()
                .unwrap_or_else(|| format!("file{id}")),
        };
    }

    /// Overrides the display filename.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Sets the alt text shown to screen readers.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the `attachment://` URL referencing this attachment.
    #[must_use]
    pub fn url(&self) -> String {
        format!("attachment://{}", self.filename)
    }

    /// Returns the multipart field name carrying this attachment's content.
    #[must_use]
    pub fn field_name(&self) -> String {
        format!("files[{}]", self.id)
    }
}

/// Image formats recognised for auto-named uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG (JFIF or Exif)
    Jpeg,
    /// `WebP` (RIFF container)
    Webp,
    /// Graphics Interchange Format
    Gif,
}

impl ImageFormat {
    /// Minimum number of bytes inspected.
    const MIN_HEADER_LEN: usize = 8;

    /// Detects the image format from the leading bytes of `content`.
    ///
    /// Falls back to [`ImageFormat::Png`] for short or unrecognised input,
    /// since the result only picks a file extension.
    #[must_use]
    pub fn detect(content: &[u8]) -> Self {
        if content.len() < Self::MIN_HEADER_LEN {
            return Self::Png;
        }

        if &content[1..4] == b"PNG" {
            Self::Png
        } else if content.starts_with(&[0xFF, 0xD8, 0xFF])
            || content.get(6..9) == Some(&b"JFI"[..])
        {
            Self::Jpeg
        } else if content.starts_with(b"RIF") {
            Self::Webp
        } else if content.starts_with(b"GIF") {
            Self::Gif
        } else {
            Self::Png
        }
    }

    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }
}
