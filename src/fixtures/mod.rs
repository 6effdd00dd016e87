//! Test fixtures for webhook payloads.
//!
//! Payloads mirror what the platform delivers to a webhook endpoint.

use crate::webhooks::{WebhookBody, WebhookRequest, SIGNING_SECRET_HEADER};
use serde_json::{json, Value};

/// A `MESSAGE.RECEIVED` delivery payload
pub fn message_received_body() -> Value {
    json!({
        "type": "MESSAGE.RECEIVED",
        "conversation": {
            "id": 123,
            "from": "+14155551234",
            "to": "+14155555678"
        },
        "status": "RECEIVED",
        "direction": "INBOUND",
        "segments": 1,
        "sentAt": "2024-01-01T00:00:00Z",
        "message": {
            "id": 456,
            "content": {
                "text": "Test message from webhook simulator"
            }
        }
    })
}

/// A `USER.TYPING` delivery payload
pub fn user_typing_body() -> Value {
    json!({
        "type": "USER.TYPING",
        "startedAt": "2024-01-01T00:00:00Z",
        "conversation": {
            "id": 123,
            "from": "+14155551234",
            "to": "+14155555678"
        }
    })
}

/// Build a webhook request carrying the given secret, with the body
/// serialized to a raw string as an HTTP server would hand it over
pub fn signed_request(secret: &str, body: Value) -> WebhookRequest {
    WebhookRequest::new(WebhookBody::Text(body.to_string()))
        .header(SIGNING_SECRET_HEADER, secret)
}
