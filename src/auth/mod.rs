//! Authentication for outbound Pinnacle API requests.
//!
//! The API authenticates with a single `PINNACLE-API-KEY` header.

use crate::config::PinnacleConfig;
use crate::errors::{ConfigurationError, PinnacleError, PinnacleResult};
use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "pinnacle-api-key";

/// Builds authenticated header sets from configuration
#[derive(Clone)]
pub struct AuthManager {
    config: Arc<PinnacleConfig>,
}

impl AuthManager {
    /// Create a new authentication manager
    pub fn new(config: Arc<PinnacleConfig>) -> Self {
        Self { config }
    }

    /// Get headers for an API request
    pub fn get_headers(&self) -> PinnacleResult<HeaderMap> {
        let api_key = self
            .config
            .api_key()
            .ok_or(PinnacleError::Configuration(ConfigurationError::MissingApiKey))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            HeaderValue::from_str(api_key.expose_secret()).map_err(|_| {
                PinnacleError::Configuration(ConfigurationError::InvalidConfiguration {
                    message: "API key contains invalid header characters".to_string(),
                })
            })?,
        );
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );

        Ok(headers)
    }
}

impl std::fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinnacleConfigBuilder;

    #[test]
    fn test_headers_include_api_key() {
        let config = Arc::new(
            PinnacleConfigBuilder::new()
                .api_key("pk-test-123")
                .build()
                .unwrap(),
        );
        let headers = AuthManager::new(config).get_headers().unwrap();
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "pk-test-123");
        assert!(headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn test_missing_api_key_errors() {
        let config = Arc::new(PinnacleConfigBuilder::new().build_unchecked());
        assert!(matches!(
            AuthManager::new(config).get_headers(),
            Err(PinnacleError::Configuration(ConfigurationError::MissingApiKey))
        ));
    }
}
