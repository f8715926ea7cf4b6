//! Wire frame protocol and SSE response assembly
//!
//! Each frame on a run stream is one SSE `data:` line carrying a JSON object
//! of shape `{event, run_id, data}`. The frame kind lives inside the JSON;
//! no SSE `event:` field is emitted, matching the gateway's frontend
//! contract. A stream, once opened, carries zero or more `on_chain_stream`
//! frames followed by exactly one terminal frame.

use axum::{
    BoxError,
    http::header,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_stream::{StreamExt, wrappers::ReceiverStream};

use agentgate_core::{EngineState, RunId, UpdateEvent};

/// Kind tag of a wire frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    /// One engine update, relayed verbatim.
    OnChainStream,
    /// Terminal frame: the update sequence completed normally.
    OnChainEnd,
    /// Terminal frame: the engine failed while producing updates.
    OnChainError,
}

impl FrameKind {
    pub fn is_terminal(self) -> bool {
        matches!(self, FrameKind::OnChainEnd | FrameKind::OnChainError)
    }
}

/// One textual event on the run stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStreamFrame {
    pub event: FrameKind,
    pub run_id: RunId,
    pub data: serde_json::Value,
}

impl RunStreamFrame {
    /// Frame carrying one engine update payload verbatim.
    pub fn stream(run_id: RunId, update: UpdateEvent) -> Self {
        Self {
            event: FrameKind::OnChainStream,
            run_id,
            data: update,
        }
    }

    /// Terminal completion frame. Reports the run's initial state as the
    /// output; the relay does not merge updates into its state copy.
    pub fn end(run_id: RunId, state: &EngineState) -> Self {
        Self {
            event: FrameKind::OnChainEnd,
            run_id,
            data: serde_json::json!({
                "output": state,
            }),
        }
    }

    /// Terminal error frame with a human-readable description.
    pub fn error(run_id: RunId, description: impl Into<String>) -> Self {
        Self {
            event: FrameKind::OnChainError,
            run_id,
            data: serde_json::json!({
                "error": description.into(),
            }),
        }
    }
}

/// Build the streaming HTTP response for a run from its frame channel.
///
/// Frames are flushed in channel order, one SSE event per frame. The
/// response disables caching and emits keep-alive comments while the
/// engine is quiet.
pub fn relay_sse_response(
    frames: tokio::sync::mpsc::Receiver<RunStreamFrame>,
    keep_alive_interval: Duration,
) -> Response {
    let stream = ReceiverStream::new(frames).map(|frame| {
        let json = serde_json::to_string(&frame).map_err(|e| Box::new(e) as BoxError)?;
        Ok::<_, BoxError>(Event::default().data(json))
    });

    let sse = Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(keep_alive_interval)
            .text("keep-alive"),
    );

    let mut response = sse.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-cache"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stream_frame_carries_update_verbatim() {
        let frame = RunStreamFrame::stream(RunId::new_unchecked("r1"), json!({"step": 1}));
        let value = serde_json::to_value(&frame).unwrap();
        assert_eq!(
            value,
            json!({"event": "on_chain_stream", "run_id": "r1", "data": {"step": 1}})
        );
    }

    #[test]
    fn end_frame_reports_input_state_as_output() {
        let state = EngineState::default();
        let frame = RunStreamFrame::end(RunId::new_unchecked("r1"), &state);
        let value = serde_json::to_value(&frame).unwrap();
        assert_eq!(value["event"], "on_chain_end");
        assert_eq!(
            value["data"]["output"],
            serde_json::to_value(&state).unwrap()
        );
    }

    #[test]
    fn error_frame_wraps_description() {
        let frame = RunStreamFrame::error(RunId::new_unchecked("r1"), "graph exploded");
        let value = serde_json::to_value(&frame).unwrap();
        assert_eq!(
            value,
            json!({"event": "on_chain_error", "run_id": "r1", "data": {"error": "graph exploded"}})
        );
    }

    #[test]
    fn terminal_kinds() {
        assert!(!FrameKind::OnChainStream.is_terminal());
        assert!(FrameKind::OnChainEnd.is_terminal());
        assert!(FrameKind::OnChainError.is_terminal());
    }
}
