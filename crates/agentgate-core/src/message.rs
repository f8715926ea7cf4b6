//! Typed chat messages and input normalization
//!
//! The gateway treats message payloads as opaque JSON, with one exception:
//! when the last element of an inbound message list is a mapping tagged as a
//! human message, it is re-encoded into the engine's canonical message
//! representation before the state is handed to the engine. This is a
//! one-element lookahead, never a full-list transform; earlier elements pass
//! through verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The engine's canonical message representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatMessage {
    /// A user-authored conversation turn.
    Human { content: String },
    /// An engine-authored conversation turn.
    Ai { content: String },
}

impl ChatMessage {
    pub fn human(content: impl Into<String>) -> Self {
        ChatMessage::Human {
            content: content.into(),
        }
    }

    /// Serialize into the JSON shape the engine consumes.
    pub fn to_value(&self) -> Value {
        // Infallible for this enum: plain struct variants of strings.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Normalize an inbound message list for engine consumption.
///
/// If the final element is a mapping with `"type": "human"`, it is replaced
/// by the canonical [`ChatMessage::Human`] encoding of its `content` field
/// (missing or non-string content becomes the empty string). All other
/// elements, including earlier human-tagged ones, are left untouched.
pub fn normalize_messages(mut messages: Vec<Value>) -> Vec<Value> {
    if let Some(last) = messages.last_mut()
        && last.get("type").and_then(Value::as_str) == Some("human")
    {
        let content = last
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        *last = ChatMessage::human(content).to_value();
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trailing_human_message_is_canonicalized() {
        let messages = vec![json!({"type": "human", "content": "hi", "extra": 1})];
        let normalized = normalize_messages(messages);
        assert_eq!(normalized, vec![json!({"type": "human", "content": "hi"})]);
    }

    #[test]
    fn earlier_elements_are_never_retyped() {
        let messages = vec![
            json!({"type": "human", "content": "first", "extra": true}),
            json!({"type": "ai", "content": "reply"}),
            json!({"type": "human", "content": "second"}),
        ];
        let normalized = normalize_messages(messages.clone());
        assert_eq!(normalized[0], messages[0]);
        assert_eq!(normalized[1], messages[1]);
        assert_eq!(normalized[2], json!({"type": "human", "content": "second"}));
    }

    #[test]
    fn non_human_tail_passes_through() {
        let messages = vec![json!({"type": "ai", "content": "done"})];
        assert_eq!(normalize_messages(messages.clone()), messages);
    }

    #[test]
    fn missing_content_becomes_empty_string() {
        let messages = vec![json!({"type": "human"})];
        assert_eq!(
            normalize_messages(messages),
            vec![json!({"type": "human", "content": ""})]
        );
    }

    #[test]
    fn empty_list_is_a_no_op() {
        assert!(normalize_messages(Vec::new()).is_empty());
    }
}
