//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional; validation and defaults are applied by
/// [`ValidatedConfig`](super::ValidatedConfig).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Target webhook section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// HTTP client section
    #[serde(default)]
    pub http: HttpSection,

    /// Rate-limit retry section
    #[serde(default)]
    pub rate_limit: RateLimitSection,
}

/// Target webhook section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL including its token
    pub url: Option<String>,

    /// Forum thread to post into
    pub thread_id: Option<u64>,
}

/// HTTP client section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// `User-Agent` header value
    pub user_agent: Option<String>,
}

/// Rate-limit retry section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimitSection {
    /// Extra wait added to Discord's `retry_after`, in milliseconds
    pub safety_margin_ms: Option<u64>,

    /// Maximum rate-limit retries per call (unbounded when absent)
    pub max_retries: Option<u32>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Discord webhook client configuration

[webhook]
# Webhook URL (required), as shown in the channel's integration settings
# url = "https://discord.com/api/webhooks/<id>/<token>"

# Forum thread to post into (default: the webhook's channel)
# thread_id = 1234567890123456789

[http]
# Request timeout in seconds (default: 30)
# timeout = 30

# User-Agent header (default: DiscordBot (<crate>, <version>))
# user_agent = "DiscordBot (https://example.com, 1.0)"

[rate_limit]
# Extra wait added to Discord's retry_after, in milliseconds (default: 1000)
# safety_margin_ms = 1000

# Maximum rate-limit retries per call (default: unbounded)
# max_retries = 10
"#
    .to_string()
}
