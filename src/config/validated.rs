//! Validated configuration built from a TOML source.
//!
//! All validation is performed during construction; a `ValidatedConfig`
//! always describes a usable webhook target and client.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::HeaderValue;
use url::Url;

use crate::path::expand_tilde;
use crate::webhook::{Channel, ReqwestClient, RetryPolicy, WebhookClient};

use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] for a config file or
/// [`ValidatedConfig::from_toml`] for an already parsed one.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Webhook target (URL and optional thread)
    pub channel: Channel,

    /// HTTP request timeout
    pub timeout: Duration,

    /// `User-Agent` header sent with every request
    pub user_agent: HeaderValue,

    /// Rate-limit retry behaviour
    pub retry_policy: RetryPolicy,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_retries = self
            .retry_policy
            .max_rate_limit_retries
            .map_or_else(|| "unbounded".to_string(), |n| n.to_string());

        write!(
            f,
            "Config {{ target: {}, timeout: {}s, rate_limit: +{}ms/{} retries }}",
            self.channel,
            self.timeout.as_secs(),
            self.retry_policy.safety_margin.as_millis(),
            max_retries,
        )
    }
}

impl ValidatedConfig {
    /// Loads and validates a configuration file.
    ///
    /// A leading `~` in `path` is expanded to the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The configuration is invalid (see [`from_toml`](Self::from_toml))
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = expand_tilde(path.as_ref());
        let toml = TomlConfig::load(&path)?;
        Self::from_toml(&toml)
    }

    /// Validates a parsed configuration and applies defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `webhook.url` is missing or not an absolute URL
    /// - `http.timeout` is zero
    /// - `http.user_agent` is not a valid header value
    pub fn from_toml(toml: &TomlConfig) -> Result<Self, ConfigError> {
        let channel = Self::resolve_channel(toml)?;
        let timeout = Self::resolve_timeout(toml)?;
        let user_agent = Self::resolve_user_agent(toml)?;
        let retry_policy = Self::build_retry_policy(toml)?;

        Ok(Self {
            channel,
            timeout,
            user_agent,
            retry_policy,
        })
    }

    /// Builds a webhook client using the configured timeout, user agent and
    /// retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ClientBuild`] if the HTTP client cannot be
    /// initialised (for example, no TLS backend is available).
    pub fn build_client(&self) -> Result<WebhookClient, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(ConfigError::ClientBuild)?;

        Ok(WebhookClient::new(ReqwestClient::from_client(http))
            .with_retry_policy(self.retry_policy.clone()))
    }

    fn resolve_channel(toml: &TomlConfig) -> Result<Channel, ConfigError> {
        let url_str = toml.webhook.url.as_deref().ok_or_else(|| {
            ConfigError::missing(field::URL, "Set webhook.url in the config file")
        })?;

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "expected an http or https URL".to_string(),
            });
        }

        let channel = Channel::new(url);
        Ok(match toml.webhook.thread_id {
            Some(thread_id) => channel.with_thread(thread_id),
            None => channel,
        })
    }

    fn resolve_timeout(toml: &TomlConfig) -> Result<Duration, ConfigError> {
        match toml.http.timeout {
            Some(0) => Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than zero".to_string(),
            }),
            Some(secs) => Ok(Duration::from_secs(secs)),
            None => Ok(defaults::http_timeout()),
        }
    }

    fn resolve_user_agent(toml: &TomlConfig) -> Result<HeaderValue, ConfigError> {
        let value = toml
            .http
            .user_agent
            .as_deref()
            .unwrap_or(defaults::USER_AGENT);

        if value.trim().is_empty() {
            return Err(ConfigError::InvalidUserAgent {
                value: value.to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidUserAgent {
            value: value.to_string(),
            reason: e.to_string(),
        })
    }

    fn build_retry_policy(toml: &TomlConfig) -> Result<RetryPolicy, ConfigError> {
        let section = &toml.rate_limit;

        let margin = section
            .safety_margin_ms
            .map_or_else(defaults::rate_limit_safety_margin, Duration::from_millis);

        if margin > Duration::from_secs(60) {
            return Err(ConfigError::InvalidRetry(format!(
                "safety_margin_ms must be at most 60000, got {}",
                margin.as_millis()
            )));
        }

        let policy = RetryPolicy::new().with_safety_margin(margin);
        Ok(match section.max_retries {
            Some(max) => policy.with_max_rate_limit_retries(max),
            None => policy,
        })
    }
}

/// Writes the default configuration template to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let path = expand_tilde(path);
    let template = super::toml::default_config_template();
    std::fs::write(&path, template).map_err(|e| ConfigError::FileWrite { path, source: e })
}
