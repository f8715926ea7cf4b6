//! Engine adapter contract
//!
//! The gateway never looks inside the external computation engine. It hands
//! the engine an initial [`EngineState`] and consumes a lazy, ordered, finite
//! stream of opaque update payloads in return. A failure during production
//! surfaces as an `Err` item at the point of failure and terminates the
//! stream; the adapter applies no retries and no internal timeout — those
//! are policy decisions that belong above this seam.
//!
//! The returned stream must be abandonable: dropping it cancels any
//! outstanding engine work without leaking resources. The relay relies on
//! this when a client disconnects mid-run.

use futures::stream::{self, BoxStream, StreamExt};
use serde_json::Value;

use crate::state::EngineState;

/// One incremental progress payload produced by the engine. Opaque to the
/// gateway and relayed verbatim.
pub type UpdateEvent = Value;

/// The update sequence produced by one engine invocation.
pub type UpdateStream = BoxStream<'static, Result<UpdateEvent, EngineError>>;

/// Failure raised by the engine while producing updates.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Boundary to the external computation engine.
pub trait EngineAdapter: Send + Sync {
    /// Start one engine invocation against the given initial state.
    ///
    /// Updates must be consumed strictly in production order.
    fn run(&self, state: EngineState) -> UpdateStream;
}

/// Engine stub that replays a fixed script of updates.
///
/// Used by tests and demos in place of a real engine: yields each scripted
/// item in order, terminating the stream at the first error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEngine {
    script: Vec<Result<UpdateEvent, EngineError>>,
}

impl ScriptedEngine {
    /// Replay the given updates, then complete normally.
    pub fn completing(updates: Vec<UpdateEvent>) -> Self {
        Self {
            script: updates.into_iter().map(Ok).collect(),
        }
    }

    /// Replay the given updates, then fail with `error`.
    pub fn failing_after(updates: Vec<UpdateEvent>, error: EngineError) -> Self {
        let mut script: Vec<_> = updates.into_iter().map(Ok).collect();
        script.push(Err(error));
        Self { script }
    }
}

impl EngineAdapter for ScriptedEngine {
    fn run(&self, _state: EngineState) -> UpdateStream {
        let script = self.script.clone();
        let mut failed = false;
        stream::iter(script)
            .take_while(move |item| {
                // Stop after the first error has been yielded.
                let keep = !failed;
                failed = failed || item.is_err();
                std::future::ready(keep)
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn completing_script_yields_updates_in_order() {
        let engine = ScriptedEngine::completing(vec![json!({"step": 1}), json!({"step": 2})]);
        let items: Vec<_> = engine.run(EngineState::default()).collect().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), &json!({"step": 1}));
        assert_eq!(items[1].as_ref().unwrap(), &json!({"step": 2}));
    }

    #[tokio::test]
    async fn failing_script_terminates_at_the_error() {
        let engine = ScriptedEngine::failing_after(
            vec![json!({"step": 1})],
            EngineError::new("graph exploded"),
        );
        let items: Vec<_> = engine.run(EngineState::default()).collect().await;
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert_eq!(items[1].as_ref().unwrap_err().message(), "graph exploded");
    }
}
