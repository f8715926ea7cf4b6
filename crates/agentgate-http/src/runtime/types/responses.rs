//! Response DTOs for the gateway endpoints

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use agentgate_core::{Run, Thread};

/// Response for `POST /threads`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ThreadResponse {
    /// Identifier of the created thread
    #[schema(example = "0b6cf1e0-9a3e-4d55-9c2f-0f2f4f1a7b11")]
    pub thread_id: String,
    /// Metadata supplied at creation
    #[schema(value_type = Object)]
    pub metadata: Map<String, Value>,
}

impl From<Thread> for ThreadResponse {
    fn from(thread: Thread) -> Self {
        Self {
            thread_id: thread.thread_id.into(),
            metadata: thread.metadata,
        }
    }
}

/// Full thread record for `GET /threads/{thread_id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ThreadRecordResponse {
    pub thread_id: String,
    #[schema(value_type = Object)]
    pub metadata: Map<String, Value>,
    #[schema(value_type = Vec<Object>)]
    pub messages: Vec<Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Thread> for ThreadRecordResponse {
    fn from(thread: Thread) -> Self {
        Self {
            thread_id: thread.thread_id.into(),
            metadata: thread.metadata,
            messages: thread.messages,
            created_at: thread.created_at,
        }
    }
}

/// Run record for `GET /threads/{thread_id}/runs/{run_id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RunResponse {
    #[schema(example = "9f0d2c61-74ad-4d3e-8f42-6f4b5c7f2a90")]
    pub run_id: String,
    pub thread_id: String,
    /// Current lifecycle status
    #[schema(example = "streaming")]
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Run> for RunResponse {
    fn from(run: Run) -> Self {
        Self {
            run_id: run.run_id.into(),
            thread_id: run.thread_id.into(),
            status: run.status.to_string(),
            created_at: run.created_at,
        }
    }
}
