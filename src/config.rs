//! Configuration for the explainer client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Default messages endpoint.
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
/// Default generation token budget.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
/// Value of the `anthropic-version` header.
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Environment variable overriding the endpoint.
pub const API_URL_ENV: &str = "RAD_EXPLAINER_API_URL";
/// Environment variable overriding the model.
pub const MODEL_ENV: &str = "RAD_EXPLAINER_MODEL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "RAD_EXPLAINER_TIMEOUT_SECS";
/// Environment variable overriding how many samples run at once.
pub const CONCURRENCY_ENV: &str = "RAD_EXPLAINER_CONCURRENCY";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value is out of range or malformed.
    #[error("invalid configuration: {0}")]
    Invalid(String),
    /// The endpoint is not a URL.
    #[error("invalid api_url: {0}")]
    Url(#[from] url::ParseError),
}

/// Client configuration. The character ceiling and disclaimer are constants, not settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExplainerConfig {
    /// Messages endpoint.
    pub api_url: String,
    /// Model identifier.
    pub model: String,
    /// Generation token budget.
    pub max_tokens: u32,
    /// `anthropic-version` header value.
    pub api_version: String,
    /// Whole-request timeout.
    #[serde(with = "duration_secs")]
    pub request_timeout: Duration,
    /// Connection timeout.
    #[serde(with = "duration_secs")]
    pub connect_timeout: Duration,
    /// Samples translated at once by the driver; 1 is strictly sequential.
    pub concurrency: usize,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(10),
            concurrency: 1,
        }
    }
}

impl ExplainerConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with the `RAD_EXPLAINER_*` environment variables.
    ///
    /// # Errors
    /// Returns an error if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values returned by `lookup`.
    ///
    /// # Errors
    /// Returns an error if a numeric value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            config.api_url = url;
        }
        if let Some(model) = lookup(MODEL_ENV) {
            config.model = model;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::Invalid(format!("{TIMEOUT_ENV}={raw}: {e}")))?;
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup(CONCURRENCY_ENV) {
            config.concurrency = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::Invalid(format!("{CONCURRENCY_ENV}={raw}: {e}")))?;
        }

        Ok(config)
    }

    /// Set the endpoint.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set driver concurrency.
    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any value is out of range or invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api_url must be http or https, got {}",
                url.scheme()
            )));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model must not be empty".to_string()));
        }

        if self.api_version.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "api_version must not be empty".to_string(),
            ));
        }

        if self.max_tokens == 0 {
            return Err(ConfigError::Invalid("max_tokens must be > 0".to_string()));
        }

        if self.concurrency == 0 {
            return Err(ConfigError::Invalid("concurrency must be > 0".to_string()));
        }

        Ok(())
    }
}

/// Serde module for whole-second durations.
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExplainerConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.api_version, "2023-06-01");
        assert_eq!(config.concurrency, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ExplainerConfig::new()
            .with_api_url("http://127.0.0.1:9999/v1/messages")
            .with_model("test-model")
            .with_timeout(Duration::from_secs(5))
            .with_concurrency(3);

        assert_eq!(config.api_url, "http://127.0.0.1:9999/v1/messages");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.concurrency, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup() {
        let config = ExplainerConfig::from_lookup(|key| match key {
            MODEL_ENV => Some("other-model".to_string()),
            TIMEOUT_ENV => Some("30".to_string()),
            CONCURRENCY_ENV => Some(" 2 ".to_string()),
            _ => None,
        })
        .unwrap_or_default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, "other-model");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.concurrency, 2);
    }

    #[test]
    fn test_from_lookup_rejects_bad_number() {
        let result = ExplainerConfig::from_lookup(|key| {
            (key == TIMEOUT_ENV).then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            ExplainerConfig::new().with_api_url("not a url").validate(),
            Err(ConfigError::Url(_))
        ));
        assert!(matches!(
            ExplainerConfig::new().with_api_url("ftp://example.com").validate(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(ExplainerConfig::new().with_model(" ").validate().is_err());
        assert!(ExplainerConfig::new().with_concurrency(0).validate().is_err());
    }

    #[test]
    fn test_serde_roundtrip_uses_seconds() {
        let value = serde_json::to_value(ExplainerConfig::default()).unwrap_or_default();
        assert_eq!(value["request_timeout"], 120);
        assert_eq!(value["connect_timeout"], 10);
    }
}
