//! Webhook layer for delivering messages to Discord.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`], [`RequestBody`])
//! - Abstracting HTTP clients ([`HttpClient`], [`ReqwestClient`])
//! - Addressing a webhook and thread ([`Channel`])
//! - Sending, editing and deleting messages ([`WebhookClient`], [`PostedMessage`])
//! - Classifying rejections and waiting out rate limits ([`Rejection`], [`RetryPolicy`])

mod channel;
mod client;
mod error;
mod http;
pub mod payload;
mod posted;
mod resolver;
mod retry;
mod service;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod retry_tests;
#[cfg(test)]
mod service_tests;

pub use channel::Channel;
pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use http::{FormPart, HttpClient, HttpRequest, HttpResponse, MultipartBody, RequestBody};
pub use posted::{PostedMessage, ResponseAuthor};
pub use resolver::{Rejection, StatusPayload};
pub use retry::RetryPolicy;
pub use service::{RateLimitEvent, RateLimitHook, WebhookClient};
