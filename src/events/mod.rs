//! Inbound webhook event types.
//!
//! The platform delivers two event shapes, discriminated by the `type`
//! field of the payload: message lifecycle notifications and user typing
//! indicators. Fields not modeled here are retained in `extra` so callers
//! can still reach properties added by the platform later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminator value that routes a payload to [`UserEvent`]
pub const USER_TYPING_EVENT: &str = "USER.TYPING";

/// A verified, parsed webhook delivery
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// Message-related notification (received, delivered, etc.)
    Message(MessageEvent),
    /// User typing indicator
    UserTyping(UserEvent),
}

impl InboundEvent {
    /// The raw `type` discriminator of the payload, if present
    pub fn event_type(&self) -> Option<&str> {
        match self {
            Self::Message(event) => event.event_type.as_deref(),
            Self::UserTyping(event) => Some(&event.event_type),
        }
    }

    /// Conversation metadata shared by both variants
    pub fn conversation(&self) -> Option<&Conversation> {
        match self {
            Self::Message(event) => event.conversation.as_ref(),
            Self::UserTyping(event) => event.conversation.as_ref(),
        }
    }
}

/// Conversation metadata carried on inbound events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier of the conversation
    #[serde(default)]
    pub id: Option<i64>,
    /// Sender phone number in E.164 format
    #[serde(default)]
    pub from: Option<String>,
    /// Recipient phone number in E.164 format
    #[serde(default)]
    pub to: Option<String>,
}

/// Direction of a message relative to the integrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageDirection {
    /// Message sent to the integrator
    Inbound,
    /// Message sent by the integrator
    Outbound,
}

/// An incoming message or message status update received via webhook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    /// Event type, e.g. `MESSAGE.RECEIVED`
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    /// Conversation metadata
    #[serde(default)]
    pub conversation: Option<Conversation>,
    /// Delivery status reported by the platform
    #[serde(default)]
    pub status: Option<String>,
    /// Message direction
    #[serde(default)]
    pub direction: Option<MessageDirection>,
    /// Number of billed segments
    #[serde(default)]
    pub segments: Option<u32>,
    /// When the message was sent
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
    /// When the message was delivered, if it has been
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    /// The message itself
    #[serde(default)]
    pub message: Option<MessageEventMessage>,
    /// Properties unmapped to the current definition
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The message attached to a [`MessageEvent`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEventMessage {
    /// Unique identifier of the message
    #[serde(default)]
    pub id: Option<i64>,
    /// Message content
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Content of an inbound or outbound message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContent {
    /// Text body
    #[serde(default)]
    pub text: Option<String>,
    /// Attached media URLs
    #[serde(default)]
    pub media_urls: Option<Vec<String>>,
    /// Properties unmapped to the current definition
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An event triggered by a user, such as when they start typing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    /// Event type, always `USER.TYPING` for now
    #[serde(rename = "type")]
    pub event_type: String,
    /// When the user event started
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// Conversation metadata
    #[serde(default)]
    pub conversation: Option<Conversation>,
    /// Properties unmapped to the current definition
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
