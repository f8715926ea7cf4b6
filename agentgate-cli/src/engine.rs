//! Built-in demo engine
//!
//! Stands in for the real agent graph so the gateway is runnable
//! end-to-end: emits a single update echoing the latest human message,
//! then completes.

use futures::stream::{self, StreamExt};
use serde_json::{Value, json};

use agentgate_core::{EngineAdapter, EngineState, UpdateStream};

#[derive(Debug, Clone, Copy, Default)]
pub struct EchoEngine;

impl EngineAdapter for EchoEngine {
    fn run(&self, state: EngineState) -> UpdateStream {
        let content = state
            .messages
            .iter()
            .rev()
            .find(|m| m.get("type").and_then(Value::as_str) == Some("human"))
            .and_then(|m| m.get("content").and_then(Value::as_str))
            .unwrap_or_default()
            .to_string();

        let update = json!({
            "echo": {
                "messages": [{"type": "ai", "content": format!("Echo: {content}")}]
            }
        });
        stream::iter(vec![Ok(update)]).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_latest_human_message() {
        let state = EngineState::new(
            vec![
                json!({"type": "human", "content": "first"}),
                json!({"type": "ai", "content": "reply"}),
                json!({"type": "human", "content": "second"}),
            ],
            None,
            None,
            None,
        );
        let items: Vec<_> = EchoEngine.run(state).collect().await;
        assert_eq!(items.len(), 1);
        let update = items[0].as_ref().unwrap();
        assert_eq!(
            update["echo"]["messages"][0]["content"],
            "Echo: second"
        );
    }

    #[tokio::test]
    async fn empty_conversation_still_completes() {
        let items: Vec<_> = EchoEngine.run(EngineState::default()).collect().await;
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].as_ref().unwrap()["echo"]["messages"][0]["content"],
            "Echo: "
        );
    }
}
