//! Gateway error taxonomy
//!
//! Two failure domains exist at this layer: lookups against the stores
//! (`NotFound`) and failures raised by the external engine while producing
//! updates. Engine failures are only ever surfaced through the event stream
//! once a run has started; not-found errors are synchronous.

use crate::engine::EngineError;
use crate::identifiers::{RunId, ThreadId};

/// Errors produced by the gateway's core operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// No thread with the given identifier exists.
    #[error("thread '{thread_id}' not found")]
    ThreadNotFound { thread_id: ThreadId },

    /// No run with the given identifier exists under the addressed thread.
    #[error("run '{run_id}' not found")]
    RunNotFound { run_id: RunId },

    /// The external engine failed while producing updates.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl GatewayError {
    /// Whether this error maps to a missing-resource lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GatewayError::ThreadNotFound { .. } | GatewayError::RunNotFound { .. }
        )
    }
}
