//! Mock HTTP client and canned Discord responses shared by webhook tests.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const WEBHOOK_URL: &str = "https://discord.com/api/webhooks/3003/secret-token";

/// Mock HTTP client that returns a configured sequence of responses.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

pub fn response(status: u16, body: &str) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.as_bytes().to_vec(),
    ))
}

pub fn no_content() -> Result<HttpResponse, HttpError> {
    response(204, "")
}

pub fn rate_limited(retry_after: f64) -> Result<HttpResponse, HttpError> {
    response(
        429,
        &format!(
            r#"{{"message":"You are being rate limited.","retry_after":{retry_after},"global":false}}"#
        ),
    )
}

pub fn unknown_message() -> Result<HttpResponse, HttpError> {
    response(404, r#"{"message":"Unknown Message","code":10008}"#)
}

/// A message body as returned by `?wait=true`.
pub fn message_body(id: u64, channel_id: u64, content: &str, edited: Option<&str>) -> String {
    serde_json::json!({
        "id": id.to_string(),
        "type": 0,
        "content": content,
        "channel_id": channel_id.to_string(),
        "author": {"id": "3003", "username": "Deploy Bot", "avatar": null, "bot": true},
        "attachments": [],
        "embeds": [],
        "mentions": [],
        "mention_roles": [],
        "pinned": false,
        "mention_everyone": false,
        "tts": false,
        "timestamp": "2024-05-01T12:00:00.000000+00:00",
        "edited_timestamp": edited,
        "flags": 0,
        "components": [],
        "webhook_id": "3003"
    })
    .to_string()
}

pub fn posted(id: u64, channel_id: u64, content: &str) -> Result<HttpResponse, HttpError> {
    response(200, &message_body(id, channel_id, content, None))
}
