//! Pinnacle API Client
//!
//! Client library for the Pinnacle messaging platform (SMS/MMS/RCS) with:
//! - Webhook verification and typed event dispatch
//! - Presigned-URL file uploads
//! - Typed error taxonomy carrying HTTP-style status codes
//!
//! # Processing a webhook
//!
//! ```rust
//! use pinnacle_client::webhooks::{WebhookRequest, WebhookVerifier, SIGNING_SECRET_HEADER};
//! use pinnacle_client::InboundEvent;
//!
//! let verifier = WebhookVerifier::new("your-signing-secret");
//! let request = WebhookRequest::new(r#"{"type": "USER.TYPING", "conversation": {"id": 1}}"#)
//!     .header(SIGNING_SECRET_HEADER, "your-signing-secret");
//!
//! match verifier.process(&request) {
//!     Ok(InboundEvent::UserTyping(event)) => println!("typing in {:?}", event.conversation),
//!     Ok(InboundEvent::Message(event)) => println!("message event {:?}", event.event_type),
//!     Err(err) => eprintln!("rejected ({:?}): {}", err.http_status(), err),
//! }
//! ```
//!
//! # Uploading a file
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = pinnacle_client::create_client_from_env()?;
//! let url = client
//!     .files()
//!     .upload_from_path("/path/to/image.png".into(), None)
//!     .await?;
//! println!("download from {url}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod transport;

// Webhook ingestion
pub mod events;
pub mod webhooks;

// Services
pub mod services;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::PinnacleClient;
pub use config::{PinnacleConfig, PinnacleConfigBuilder};
pub use errors::{PinnacleError, PinnacleResult};
pub use events::{InboundEvent, MessageEvent, UserEvent};
pub use webhooks::{WebhookRequest, WebhookVerifier};

/// Default base URL for the Pinnacle API
pub const DEFAULT_BASE_URL: &str = "https://api.pinnacle.sh";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Create a Pinnacle client with the given configuration
pub fn create_client(config: PinnacleConfig) -> PinnacleResult<PinnacleClient> {
    PinnacleClient::new(config)
}

/// Create a Pinnacle client from environment variables
///
/// Reads:
/// - `PINNACLE_API_KEY` - API key for outbound requests
/// - `PINNACLE_SIGNING_SECRET` - Shared secret for webhook verification
/// - `PINNACLE_BASE_URL` - Base URL override
/// - `PINNACLE_TIMEOUT` - Request timeout in seconds
pub fn create_client_from_env() -> PinnacleResult<PinnacleClient> {
    let config = PinnacleConfig::from_env()?;
    create_client(config)
}
