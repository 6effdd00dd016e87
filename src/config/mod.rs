//! Configuration management for the Pinnacle client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, PinnacleResult};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "PINNACLE_API_KEY";
/// Environment variable holding the webhook signing secret
pub const SIGNING_SECRET_ENV: &str = "PINNACLE_SIGNING_SECRET";
/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "PINNACLE_BASE_URL";
/// Environment variable overriding the request timeout (seconds)
pub const TIMEOUT_ENV: &str = "PINNACLE_TIMEOUT";

/// Configuration for the Pinnacle client
#[derive(Clone)]
pub struct PinnacleConfig {
    /// API key sent as the `PINNACLE-API-KEY` header
    pub(crate) api_key: Option<SecretString>,
    /// Shared secret for webhook verification
    pub(crate) signing_secret: Option<SecretString>,
    /// Base URL for API requests
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for PinnacleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinnacleConfig")
            .field("api_key", &self.api_key.is_some())
            .field("signing_secret", &self.signing_secret.is_some())
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for PinnacleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            signing_secret: None,
            base_url: Url::parse(crate::DEFAULT_BASE_URL).unwrap(),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PinnacleConfig {
    /// Create a new configuration builder
    pub fn builder() -> PinnacleConfigBuilder {
        PinnacleConfigBuilder::new()
    }

    /// Create configuration from environment variables
    ///
    /// Reads:
    /// - `PINNACLE_API_KEY` - API key for outbound requests
    /// - `PINNACLE_SIGNING_SECRET` - Shared secret for webhook verification
    /// - `PINNACLE_BASE_URL` - Base URL override
    /// - `PINNACLE_TIMEOUT` - Request timeout in seconds
    pub fn from_env() -> PinnacleResult<Self> {
        let mut builder = PinnacleConfigBuilder::new();

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            builder = builder.api_key(&key);
        }

        if let Ok(secret) = std::env::var(SIGNING_SECRET_ENV) {
            builder = builder.signing_secret(&secret);
        }

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(&url)?;
        }

        if let Ok(timeout) = std::env::var(TIMEOUT_ENV) {
            if let Ok(secs) = timeout.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(secs));
            }
        }

        builder.build()
    }

    /// Get the API key if available
    pub(crate) fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    /// Get the webhook signing secret if available
    pub fn signing_secret(&self) -> Option<&str> {
        self.signing_secret.as_ref().map(|s| s.expose_secret().as_str())
    }

    /// Build the full URL for an endpoint
    pub fn build_url(&self, endpoint: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Validate the configuration for client construction
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.api_key.is_none() {
            return Err(ConfigurationError::MissingApiKey);
        }
        Ok(())
    }
}

/// Builder for PinnacleConfig
#[derive(Default)]
pub struct PinnacleConfigBuilder {
    config: PinnacleConfig,
}

impl PinnacleConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: PinnacleConfig::default(),
        }
    }

    /// Set the API key
    pub fn api_key(mut self, key: &str) -> Self {
        self.config.api_key = Some(SecretString::new(key.to_string()));
        self
    }

    /// Set the webhook signing secret
    pub fn signing_secret(mut self, secret: &str) -> Self {
        self.config.signing_secret = Some(SecretString::new(secret.to_string()));
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> PinnacleResult<Self> {
        self.config.base_url = Url::parse(url).map_err(|e| {
            crate::errors::PinnacleError::Configuration(ConfigurationError::InvalidConfiguration {
                message: format!("Invalid URL: {}", e),
            })
        })?;
        Ok(self)
    }

    /// Set the timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration, validating that an API key is present
    pub fn build(self) -> PinnacleResult<PinnacleConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation
    ///
    /// Useful for webhook-only setups that never issue outbound requests.
    pub fn build_unchecked(self) -> PinnacleConfig {
        self.config
    }
}
