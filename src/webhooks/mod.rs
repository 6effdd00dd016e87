//! Webhook verification and dispatch.
//!
//! The platform authenticates webhook deliveries with a shared secret sent
//! verbatim in the `PINNACLE-SIGNING-SECRET` header. Verification is a
//! pure computation: compare the header to the expected secret, parse the
//! body, and route it to one of the two event shapes by its `type` field.

use crate::errors::{PinnacleError, PinnacleResult};
use crate::events::{InboundEvent, MessageEvent, UserEvent, USER_TYPING_EVENT};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, warn};

/// Header carrying the shared secret on webhook deliveries
///
/// Lookup through [`HeaderMap`] is case-insensitive, so any casing the
/// platform sends (`PINNACLE-SIGNING-SECRET`, `Pinnacle-Signing-Secret`,
/// ...) resolves to this name.
pub const SIGNING_SECRET_HEADER: &str = "pinnacle-signing-secret";

/// Body of a webhook delivery
#[derive(Debug, Clone)]
pub enum WebhookBody {
    /// Raw request body, parsed as JSON during processing
    Text(String),
    /// Body already decoded by the caller's web framework
    Json(Value),
}

impl From<String> for WebhookBody {
    fn from(raw: String) -> Self {
        Self::Text(raw)
    }
}

impl From<&str> for WebhookBody {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

impl From<Value> for WebhookBody {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// An inbound webhook delivery as handed over by the caller's HTTP layer
///
/// Lives only for the duration of one verification call; the verifier
/// neither owns nor persists it.
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    headers: HeaderMap,
    body: WebhookBody,
}

impl WebhookRequest {
    /// Create a request with an empty header map
    pub fn new(body: impl Into<WebhookBody>) -> Self {
        Self {
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Create a request from headers already collected by a web framework
    pub fn with_headers(headers: HeaderMap, body: impl Into<WebhookBody>) -> Self {
        Self {
            headers,
            body: body.into(),
        }
    }

    /// Add a header; names are normalized case-insensitively
    ///
    /// Invalid header names or values are skipped with a warning, matching
    /// how an HTTP server would never deliver them in the first place.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => warn!(header = name, "Skipping invalid webhook header"),
        }
        self
    }

    /// The signing secret header value, if present and valid UTF-8
    pub fn signing_secret(&self) -> Option<&str> {
        self.headers
            .get(SIGNING_SECRET_HEADER)
            .and_then(|value| value.to_str().ok())
    }
}

/// Verifies webhook deliveries and dispatches them to typed events
///
/// Holds the expected shared secret, normally sourced from
/// [`PinnacleConfig`](crate::config::PinnacleConfig) at bootstrap. The
/// verifier itself never touches process state, so identical inputs always
/// produce equivalent outputs.
#[derive(Clone)]
pub struct WebhookVerifier {
    signing_secret: Option<SecretString>,
}

impl WebhookVerifier {
    /// Create a verifier with the given shared secret
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: Some(SecretString::new(signing_secret.into())),
        }
    }

    /// Create a verifier with no configured secret
    ///
    /// Every call through [`process`](Self::process) will fail unauthorized
    /// until a secret is supplied per call via
    /// [`process_with_secret`](Self::process_with_secret).
    pub fn unconfigured() -> Self {
        Self {
            signing_secret: None,
        }
    }

    /// Create a verifier from configuration
    pub fn from_config(config: &crate::config::PinnacleConfig) -> Self {
        match config.signing_secret() {
            Some(secret) => Self::new(secret),
            None => Self::unconfigured(),
        }
    }

    /// Create a verifier from the `PINNACLE_SIGNING_SECRET` environment
    /// variable, read at call time
    pub fn from_env() -> Self {
        match std::env::var(crate::config::SIGNING_SECRET_ENV) {
            Ok(secret) => Self::new(secret),
            Err(_) => Self::unconfigured(),
        }
    }

    /// Verify a webhook delivery and dispatch it to a typed event
    ///
    /// # Errors
    ///
    /// - [`PinnacleError::Unauthorized`] (401) when the signing secret
    ///   header is absent, no secret is configured, or the values differ
    /// - [`PinnacleError::BadRequest`] (400) when a string body is not
    ///   valid JSON
    /// - [`PinnacleError::Response`] when a valid JSON body cannot be
    ///   coerced into the matching event shape
    pub fn process(&self, request: &WebhookRequest) -> PinnacleResult<InboundEvent> {
        verify_and_dispatch(
            request,
            self.signing_secret
                .as_ref()
                .map(|secret| secret.expose_secret().as_str()),
        )
    }

    /// Verify with an explicit secret, overriding the configured one
    pub fn process_with_secret(
        &self,
        request: &WebhookRequest,
        secret: &str,
    ) -> PinnacleResult<InboundEvent> {
        verify_and_dispatch(request, Some(secret))
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("signing_secret", &"[REDACTED]")
            .finish()
    }
}

fn verify_and_dispatch(
    request: &WebhookRequest,
    expected: Option<&str>,
) -> PinnacleResult<InboundEvent> {
    let provided = request.signing_secret().ok_or_else(|| {
        warn!("Webhook delivery without signing secret header");
        PinnacleError::unauthorized("missing signing secret header")
    })?;

    // A missing server-side secret is reported before any comparison so
    // misconfiguration is distinguishable from a forged delivery.
    let expected = expected.ok_or_else(|| PinnacleError::unauthorized("no configured secret"))?;

    // Plain equality: the platform sends the shared secret verbatim rather
    // than an HMAC digest over the body.
    if provided != expected {
        warn!("Webhook signature verification failed");
        return Err(PinnacleError::unauthorized("invalid webhook signature"));
    }

    let parsed: Value = match &request.body {
        WebhookBody::Text(raw) => serde_json::from_str(raw).map_err(|e| {
            PinnacleError::bad_request(format!("invalid message event format: {}", e))
        })?,
        WebhookBody::Json(value) => value.clone(),
    };

    dispatch(parsed)
}

/// Route a verified payload to the matching event shape by its `type` field
fn dispatch(parsed: Value) -> PinnacleResult<InboundEvent> {
    let is_typing = parsed.get("type").and_then(Value::as_str) == Some(USER_TYPING_EVENT);

    if is_typing {
        let event: UserEvent = serde_json::from_value(parsed)
            .map_err(|e| PinnacleError::Response(e.into()))?;
        debug!(conversation = ?event.conversation, "Dispatched user typing event");
        Ok(InboundEvent::UserTyping(event))
    } else {
        let event: MessageEvent = serde_json::from_value(parsed)
            .map_err(|e| PinnacleError::Response(e.into()))?;
        debug!(event_type = ?event.event_type, "Dispatched message event");
        Ok(InboundEvent::Message(event))
    }
}
