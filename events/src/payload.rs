use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Typed payload carried by `echo` and `reverse_echo` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoPayload {
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl EchoPayload {
    /// Builds a payload stamped with the current time.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// Builds a payload whose message is `message` reversed, character by
    /// character.
    pub fn reversed(message: &str) -> Self {
        Self::new(message.chars().rev().collect::<String>())
    }
}

/// Payload of the basic `/sse` stream, with `created_at` as unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnixEchoPayload {
    pub message: String,
    pub created_at: f64,
}

impl UnixEchoPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Utc::now().timestamp_micros() as f64 / 1_000_000.0,
        }
    }
}
