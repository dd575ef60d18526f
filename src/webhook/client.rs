//! Production HTTP client implementation using reqwest.

use reqwest::multipart::{Form, Part};

use super::http::{MultipartBody, RequestBody};
use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`HttpClient`] trait. Use
/// [`ValidatedConfig::build_client`](crate::config::ValidatedConfig::build_client)
/// for a client with the configured timeout and user agent.
///
/// # Example
///
/// ```no_run
/// use discord_webhooks::webhook::{HttpClient, HttpRequest, RequestBody, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://discord.com/api/webhooks/1/token")?;
/// let body = RequestBody::Json(br#"{"content":"hello"}"#.to_vec());
/// let response = client.request(HttpRequest::post(url).with_body(body)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, TLS, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        builder = match req.body {
            Some(RequestBody::Json(bytes)) => builder.body(bytes),
            Some(RequestBody::Multipart(body)) => builder.multipart(into_form(body)?),
            None => builder,
        };

        let response = builder.send().await.map_err(map_send_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

fn map_send_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}

/// Converts owned parts into a reqwest form, preserving order.
pub(super) fn into_form(body: MultipartBody) -> Result<Form, HttpError> {
    let mut form = Form::new();
    for part in body.parts {
        let mut reqwest_part = Part::bytes(part.data);
        if let Some(filename) = part.filename {
            reqwest_part = reqwest_part.file_name(filename);
        }
        if let Some(content_type) = part.content_type {
            reqwest_part = reqwest_part
                .mime_str(&content_type)
                .map_err(|e| HttpError::InvalidBody(format!("part '{}': {e}", part.name)))?;
        }
        form = form.part(part.name, reqwest_part);
    }
    Ok(form)
}
