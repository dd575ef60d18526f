//! Configuration layer.
//!
//! This module provides:
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! Loading a config file is optional; every type it produces can also be
//! built directly in code.
//!
//! # Defaults
//!
//! - `http.timeout`: 30 seconds
//! - `http.user_agent`: `DiscordBot (<crate name>, <crate version>)`
//! - `rate_limit.safety_margin_ms`: 1000
//! - `rate_limit.max_retries`: unbounded
//!
//! `webhook.url` has no default and must be set.

pub mod defaults;
mod error;
mod toml;
mod validated;


pub use error::{ConfigError, field};
pub use toml::{HttpSection, RateLimitSection, TomlConfig, WebhookSection, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
