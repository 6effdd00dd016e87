//! Error types for the Pinnacle client.
//!
//! Maps Pinnacle API failures to semantic error types carrying the
//! HTTP-style status code the platform reports them with.

use thiserror::Error;

/// Result type for Pinnacle operations
pub type PinnacleResult<T> = Result<T, PinnacleError>;

/// Root error type for the Pinnacle integration
#[derive(Error, Debug)]
pub enum PinnacleError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Authentication failure (401)
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Error message
        message: String,
    },

    /// Malformed or rejected request (400)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message
        message: String,
    },

    /// Resource not found (404)
    #[error("Not found: {message}")]
    NotFound {
        /// Error message
        message: String,
    },

    /// Server-side failure (5xx)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing error
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Any other non-2xx API response
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },
}

impl PinnacleError {
    /// Create an authentication failure
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a bad request failure
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a not-found failure
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code if applicable
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::BadRequest { .. } => Some(400),
            Self::NotFound { .. } => Some(404),
            Self::Server { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify a non-2xx API response by status code
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            "no response body".to_string()
        } else {
            body.to_string()
        };

        match status {
            401 => Self::Unauthorized { message },
            400 => Self::BadRequest { message },
            404 => Self::NotFound { message },
            500..=599 => Self::Server { status, message },
            _ => Self::Api { status, message },
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing API key
    #[error("API key is missing")]
    MissingApiKey,

    /// Missing signing secret
    #[error("Signing secret is missing")]
    MissingSigningSecret,

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Local I/O failure
    #[error("I/O error: {0}")]
    Io(String),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

impl From<reqwest::Error> for PinnacleError {
    fn from(err: reqwest::Error) -> Self {
        PinnacleError::Network(err.into())
    }
}

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    Deserialization {
        /// Error message
        message: String,
    },

    /// Unexpected response format
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::Deserialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(PinnacleError::unauthorized("nope").http_status(), Some(401));
        assert_eq!(PinnacleError::bad_request("bad").http_status(), Some(400));
        assert_eq!(PinnacleError::not_found("gone").http_status(), Some(404));
        assert_eq!(
            PinnacleError::Server {
                status: 503,
                message: "down".into()
            }
            .http_status(),
            Some(503)
        );
        assert_eq!(
            PinnacleError::Network(NetworkError::Timeout).http_status(),
            None
        );
    }

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            PinnacleError::from_status(401, "invalid key"),
            PinnacleError::Unauthorized { .. }
        ));
        assert!(matches!(
            PinnacleError::from_status(400, "bad payload"),
            PinnacleError::BadRequest { .. }
        ));
        assert!(matches!(
            PinnacleError::from_status(404, ""),
            PinnacleError::NotFound { .. }
        ));
        assert!(matches!(
            PinnacleError::from_status(502, "bad gateway"),
            PinnacleError::Server { status: 502, .. }
        ));
        assert!(matches!(
            PinnacleError::from_status(418, "teapot"),
            PinnacleError::Api { status: 418, .. }
        ));
    }

    #[test]
    fn test_from_status_empty_body() {
        match PinnacleError::from_status(404, "") {
            PinnacleError::NotFound { message } => assert_eq!(message, "no response body"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
