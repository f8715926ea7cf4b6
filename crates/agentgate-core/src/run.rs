//! Run records and status lifecycle
//!
//! A run is one invocation of the external engine against a thread. Status
//! moves `Pending -> Streaming -> {Completed | Failed}`; both terminal
//! states are final.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identifiers::{RunId, ThreadId};

/// Lifecycle status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Created, engine not yet invoked.
    Pending,
    /// Engine invocation in progress, frames being relayed.
    Streaming,
    /// Update sequence exhausted without error.
    Completed,
    /// Engine raised while producing updates.
    Failed,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Pending => "pending",
            RunStatus::Streaming => "streaming",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single engine run scoped to an owning thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub run_id: RunId,
    pub thread_id: ThreadId,
    pub status: RunStatus,
    pub created_at: DateTime<Utc>,
}

impl Run {
    /// Create a fresh pending run under the given thread.
    pub fn new(thread_id: ThreadId) -> Self {
        Self {
            run_id: RunId::generate(),
            thread_id,
            status: RunStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RunStatus::Streaming).unwrap(),
            "\"streaming\""
        );
        assert_eq!(RunStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn terminal_states() {
        assert!(!RunStatus::Pending.is_terminal());
        assert!(!RunStatus::Streaming.is_terminal());
        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Failed.is_terminal());
    }

    #[test]
    fn new_run_starts_pending() {
        let run = Run::new(ThreadId::new_unchecked("t1"));
        assert_eq!(run.status, RunStatus::Pending);
        assert_eq!(run.thread_id.as_str(), "t1");
    }
}
