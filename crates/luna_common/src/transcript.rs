//! Chat transcript records - one immutable entry per exchange.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An (incoming message, produced reply) pair. Immutable once produced;
/// persisting it is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Turn ID (UUID).
    pub id: String,

    /// ISO 8601 timestamp.
    pub ts: String,

    /// What the user sent.
    pub message: String,

    /// What the responder produced.
    pub reply: String,
}

impl ChatTurn {
    /// Record a completed exchange.
    pub fn record(message: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ts: Utc::now().to_rfc3339(),
            message: message.into(),
            reply: reply.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_serializes_with_all_fields() {
        let turn = ChatTurn::record("hello", "Hello! How can I help?");
        let json = serde_json::to_string(&turn).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["message"], "hello");
        assert_eq!(value["reply"], "Hello! How can I help?");
        assert!(!value["id"].as_str().unwrap().is_empty());
        assert!(!value["ts"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_turn_ids_are_unique() {
        let a = ChatTurn::record("m", "r");
        let b = ChatTurn::record("m", "r");
        assert_ne!(a.id, b.id);
    }
}
