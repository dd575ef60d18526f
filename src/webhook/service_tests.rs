//! Tests for `WebhookClient`.

use super::mock::{
    MockClient, WEBHOOK_URL, no_content, posted, rate_limited, response, unknown_message,
};
use super::{Channel, HttpError, RequestBody, RetryPolicy, WebhookClient, WebhookError};
use crate::cancel::{CancelToken, cancellation};
use crate::model::{Attachment, EmbedColor, Message};
use crate::time::InstantSleeper;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn channel() -> Channel {
    Channel::parse(WEBHOOK_URL).unwrap()
}

fn client(mock: &Arc<MockClient>) -> WebhookClient<Arc<MockClient>, InstantSleeper> {
    WebhookClient::new(Arc::clone(mock)).with_sleeper(InstantSleeper)
}

/// Routes `tracing` output through the test harness; filter with `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

fn json_body(body: Option<&RequestBody>) -> serde_json::Value {
    match body {
        Some(RequestBody::Json(bytes)) => serde_json::from_slice(bytes).unwrap(),
        other => panic!("expected json body, got {other:?}"),
    }
}

mod builder {
    use super::*;

    #[test]
    fn new_uses_default_retry_policy() {
        let client = WebhookClient::new(MockClient::new(vec![]));

        assert_eq!(*client.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn with_retry_policy_sets_policy() {
        let policy = RetryPolicy::new().with_max_rate_limit_retries(3);
        let client = WebhookClient::new(MockClient::new(vec![])).with_retry_policy(policy.clone());

        assert_eq!(*client.retry_policy(), policy);
    }

    #[test]
    fn debug_reports_hook_presence() {
        let client = WebhookClient::new(MockClient::new(vec![])).with_rate_limit_hook(|_| {});

        assert!(format!("{client:?}").contains("rate_limit_hook: true"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WebhookClient>();
    }
}

mod fire {
    use super::*;

    #[tokio::test]
    async fn posts_json_to_webhook_url() {
        let mock = MockClient::new(vec![no_content()]);
        let message = Message::text("hello");

        client(&mock).fire(&channel(), &message).await.unwrap();

        let request = mock.last_request();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.url.as_str(), WEBHOOK_URL);
        assert_eq!(
            request.body,
            Some(RequestBody::Json(serde_json::to_vec(&message).unwrap()))
        );
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn thread_adds_query_and_blanks_thread_name() {
        let mock = MockClient::new(vec![no_content()]);
        let message = Message::text("in thread").with_thread_name("should vanish");

        client(&mock)
            .fire(&channel().with_thread(77), &message)
            .await
            .unwrap();

        let request = mock.last_request();
        assert_eq!(request.url.query(), Some("thread_id=77"));
        assert!(json_body(request.body.as_ref()).get("thread_name").is_none());
    }

    #[tokio::test]
    async fn transport_error_is_not_retried() {
        let mock = MockClient::new(vec![Err(HttpError::Timeout)]);

        let err = client(&mock)
            .fire_with_retry(&channel(), &Message::text("x"), &CancelToken::never())
            .await
            .unwrap_err();

        assert!(matches!(err, WebhookError::Transport(HttpError::Timeout)));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn attachments_are_sent_as_multipart() {
        let mock = MockClient::new(vec![no_content()]);
        let message = Message::text("report")
            .with_attachment(Attachment::from_bytes("a.csv", b"1,2".to_vec()));

        client(&mock).fire(&channel(), &message).await.unwrap();

        let request = mock.last_request();
        let Some(RequestBody::Multipart(body)) = request.body else {
            panic!("expected multipart body");
        };
        assert_eq!(body.part("files[0]").unwrap().data, b"1,2");
        assert!(request.headers.get(http::header::CONTENT_TYPE).is_none());
    }
}

mod post {
    use super::*;

    #[tokio::test]
    async fn waits_for_and_decodes_message() {
        let mock = MockClient::new(vec![posted(1001, 2002, "hello")]);

        let message = client(&mock)
            .post(&channel(), &Message::text("hello"))
            .await
            .unwrap();

        assert_eq!(mock.last_request().url.query(), Some("wait=true"));
        assert_eq!(message.id, 1001);
        assert_eq!(message.content, "hello");
        assert_eq!(message.author.username, "Deploy Bot");
        assert_eq!(message.webhook_id, Some(3003));
        assert_eq!(message.channel, channel());
    }

    #[tokio::test]
    async fn existing_thread_never_sends_thread_name() {
        let mock = MockClient::new(vec![posted(1, 77, "x")]);
        let message = Message::text("x").with_thread_name("ignored");

        let posted = client(&mock)
            .post(&channel().with_thread(77), &message)
            .await
            .unwrap();

        let request = mock.last_request();
        assert_eq!(request.url.query(), Some("wait=true&thread_id=77"));
        assert!(json_body(request.body.as_ref()).get("thread_name").is_none());
        assert_eq!(posted.channel.thread_id(), 77);
    }

    #[tokio::test]
    async fn thread_creation_targets_new_thread() {
        let mock = MockClient::new(vec![posted(1, 5555, "first")]);
        let message = Message::text("first").with_thread_name("release 1.2");

        let posted = client(&mock).post(&channel(), &message).await.unwrap();

        assert_eq!(
            json_body(mock.last_request().body.as_ref())["thread_name"],
            "release 1.2"
        );
        assert_eq!(posted.channel, channel().with_thread(5555));
    }

    #[tokio::test]
    async fn base_channel_post_keeps_thread_zero() {
        let mock = MockClient::new(vec![posted(1, 2002, "x")]);

        let posted = client(&mock)
            .post(&channel(), &Message::text("x"))
            .await
            .unwrap();

        assert_eq!(posted.channel_id, 2002);
        assert_eq!(posted.channel.thread_id(), 0);
    }

    #[tokio::test]
    async fn embed_payload_carries_packed_color() {
        let mock = MockClient::new(vec![posted(1, 2, "")]);
        let message = Message::new()
            .embed()
            .with_title("T")
            .with_description("D")
            .with_field("K", "V", true)
            .with_color(EmbedColor::new(255, 0, 0))
            .finish();

        client(&mock).post(&channel(), &message).await.unwrap();

        let embed = &json_body(mock.last_request().body.as_ref())["embeds"][0];
        assert_eq!(embed["color"], 16_711_680);
        assert_eq!(embed["fields"].as_array().unwrap().len(), 1);
        assert_eq!(embed["fields"][0]["inline"], true);
    }

    #[tokio::test]
    async fn undecodable_body_is_decode_error() {
        let mock = MockClient::new(vec![response(200, "not json")]);

        let err = client(&mock)
            .post(&channel(), &Message::text("x"))
            .await
            .unwrap_err();

        match err {
            WebhookError::Decode { body, .. } => assert_eq!(body, "not json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

mod edit_and_delete {
    use super::*;

    #[tokio::test]
    async fn edit_patches_message_url() {
        let mock = MockClient::new(vec![posted(55, 2002, "edited")]);

        let edited = client(&mock)
            .edit(&channel().with_thread(9), 55, &Message::text("edited"))
            .await
            .unwrap();

        let request = mock.last_request();
        assert_eq!(request.method, http::Method::PATCH);
        assert_eq!(
            request.url.as_str(),
            format!("{WEBHOOK_URL}/messages/55?wait=true&thread_id=9")
        );
        assert_eq!(edited.content, "edited");
        assert_eq!(edited.channel, channel().with_thread(9));
    }

    #[tokio::test]
    async fn delete_sends_bodyless_delete() {
        let mock = MockClient::new(vec![no_content()]);

        client(&mock).delete(&channel(), 55).await.unwrap();

        let request = mock.last_request();
        assert_eq!(request.method, http::Method::DELETE);
        assert_eq!(request.url.as_str(), format!("{WEBHOOK_URL}/messages/55"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn deleting_twice_reports_unknown_message() {
        let mock = MockClient::new(vec![no_content(), unknown_message()]);
        let client = client(&mock);

        client.delete(&channel(), 55).await.unwrap();
        let err = client.delete(&channel(), 55).await.unwrap_err();

        match err {
            WebhookError::Api {
                code,
                message,
                status,
            } => {
                assert_eq!(code, 10008);
                assert_eq!(message, "Unknown Message");
                assert_eq!(status, http::StatusCode::NOT_FOUND);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

mod rate_limits {
    use super::*;

    #[tokio::test]
    async fn surface_policy_returns_rate_limited_and_calls_hook() {
        let mock = MockClient::new(vec![rate_limited(2.5)]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let hook_seen = Arc::clone(&seen);
        let client = client(&mock).with_rate_limit_hook(move |event| {
            hook_seen.lock().unwrap().push((
                event.webhook_url.to_string(),
                event.retry_after,
                event.message.and_then(|m| m.content.clone()),
            ));
        });

        let err = client
            .fire(&channel(), &Message::text("busy"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WebhookError::RateLimited { retry_after, global: false, .. }
                if (retry_after - 2.5).abs() < f64::EPSILON
        ));
        assert_eq!(mock.calls(), 1);
        assert_eq!(
            *seen.lock().unwrap(),
            [(WEBHOOK_URL.to_string(), 2.5, Some("busy".to_string()))]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn retry_waits_with_margin_and_resubmits_identical_request() {
        init_tracing();
        let mock = MockClient::new(vec![rate_limited(2.5), posted(1, 2, "ok")]);
        let client = WebhookClient::new(Arc::clone(&mock));
        let started = tokio::time::Instant::now();

        let posted = client
            .post_with_retry(&channel(), &Message::text("ok"), &CancelToken::never())
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(3500));
        assert_eq!(posted.id, 1);
        let requests = mock.captured_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    #[tokio::test]
    async fn api_error_is_not_retried() {
        let mock = MockClient::new(vec![response(
            400,
            r#"{"code":50035,"message":"Invalid Form Body","retry_after":0}"#,
        )]);
        let hook_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hook_calls);
        let client = client(&mock).with_rate_limit_hook(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let err = client
            .fire_with_retry(&channel(), &Message::new(), &CancelToken::never())
            .await
            .unwrap_err();

        assert!(matches!(err, WebhookError::Api { code: 50035, .. }));
        assert_eq!(mock.calls(), 1);
        assert_eq!(hook_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn retry_is_unbounded_by_default() {
        init_tracing();
        let mut responses: Vec<_> = (0..5).map(|_| rate_limited(0.1)).collect();
        responses.push(no_content());
        let mock = MockClient::new(responses);

        client(&mock)
            .delete_with_retry(&channel(), 1, &CancelToken::never())
            .await
            .unwrap();

        assert_eq!(mock.calls(), 6);
    }

    #[tokio::test]
    async fn retry_bound_surfaces_rate_limit() {
        let mock = MockClient::new(vec![rate_limited(1.0), rate_limited(1.0)]);
        let client =
            client(&mock).with_retry_policy(RetryPolicy::new().with_max_rate_limit_retries(1));

        let err = client
            .fire_with_retry(&channel(), &Message::text("x"), &CancelToken::never())
            .await
            .unwrap_err();

        assert!(err.is_rate_limited());
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn cancellation_stops_after_wait() {
        let mock = MockClient::new(vec![rate_limited(3.0), no_content()]);
        let (trigger, token) = cancellation();
        trigger.cancel();

        let err = client(&mock)
            .fire_with_retry(&channel(), &Message::text("x"), &token)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WebhookError::Cancelled { retry_after } if (retry_after - 3.0).abs() < f64::EPSILON
        ));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn hook_sees_every_rate_limit_during_retry() {
        let mock = MockClient::new(vec![rate_limited(0.5), rate_limited(0.5), no_content()]);
        let hook_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hook_calls);
        let client = client(&mock).with_rate_limit_hook(move |event| {
            assert!(event.message.is_none());
            counter.fetch_add(1, Ordering::SeqCst);
        });

        client
            .delete_with_retry(&channel(), 9, &CancelToken::never())
            .await
            .unwrap();

        assert_eq!(hook_calls.load(Ordering::SeqCst), 2);
    }
}
