//! Run executor
//!
//! Drives one run from engine invocation to terminal frame. The executor is
//! a spawned producer task feeding a bounded channel; the HTTP response side
//! consumes the channel as an SSE stream. When the client disconnects the
//! receiver is dropped, the next send fails, and the task winds down,
//! abandoning the engine's update stream.
//!
//! Status transitions are persisted into the run store as the run
//! progresses: `Streaming` when the engine is invoked, then exactly one of
//! `Completed` or `Failed`. An opened stream always ends with exactly one
//! terminal frame.

use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;

use agentgate_core::{EngineAdapter, EngineState, RunId, RunStatus, RunStore};

use crate::runtime::streaming::RunStreamFrame;

/// Spawn the relay task for one run and return the frame channel.
pub fn spawn_relay(
    runs: Arc<dyn RunStore>,
    engine: Arc<dyn EngineAdapter>,
    run_id: RunId,
    state: EngineState,
    channel_capacity: usize,
) -> mpsc::Receiver<RunStreamFrame> {
    let (tx, rx) = mpsc::channel(channel_capacity);

    tokio::spawn(async move {
        runs.update_status(&run_id, RunStatus::Streaming).await;
        tracing::debug!(run_id = %run_id, model = %state.reasoning_model, "run streaming");

        let mut updates = engine.run(state.clone());
        let mut relayed: u64 = 0;

        loop {
            match updates.next().await {
                Some(Ok(update)) => {
                    let frame = RunStreamFrame::stream(run_id.clone(), update);
                    if tx.send(frame).await.is_err() {
                        // Client went away; abandon the engine stream.
                        tracing::debug!(
                            run_id = %run_id,
                            relayed,
                            "client disconnected, abandoning run"
                        );
                        return;
                    }
                    relayed += 1;
                }
                Some(Err(err)) => {
                    runs.update_status(&run_id, RunStatus::Failed).await;
                    tracing::warn!(run_id = %run_id, error = %err, relayed, "run failed");
                    let _ = tx
                        .send(RunStreamFrame::error(run_id.clone(), err.message()))
                        .await;
                    return;
                }
                None => {
                    runs.update_status(&run_id, RunStatus::Completed).await;
                    tracing::info!(run_id = %run_id, relayed, "run completed");
                    let _ = tx.send(RunStreamFrame::end(run_id.clone(), &state)).await;
                    return;
                }
            }
        }
    });

    rx
}
