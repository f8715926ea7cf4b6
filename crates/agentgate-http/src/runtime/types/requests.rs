//! Request DTOs for the gateway endpoints

use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Body for `POST /threads`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateThreadRequest {
    /// Opaque caller-supplied metadata attached to the thread.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Map<String, Value>>,
}

/// Body for `POST /threads/{thread_id}/runs/stream`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRunRequest {
    /// Initial input handed to the engine.
    pub input: RunInput,
    /// Accepted for compatibility; not interpreted by the gateway.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub config: Option<Value>,
    /// Accepted for compatibility; not interpreted by the gateway.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    /// Streaming mode requested by the client.
    #[serde(default = "default_stream_mode")]
    #[schema(example = "updates")]
    pub stream_mode: String,
}

fn default_stream_mode() -> String {
    "updates".to_string()
}

/// The `input` object of a run-stream request.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RunInput {
    /// Conversation turns; only the trailing human message is re-encoded.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub messages: Vec<Value>,
    /// Number of initial search queries (default 3).
    #[serde(default)]
    pub initial_search_query_count: Option<u32>,
    /// Maximum research loops (default 3).
    #[serde(default)]
    pub max_research_loops: Option<u32>,
    /// Reasoning model identifier (defaults to the gateway's fixed model).
    #[serde(default)]
    pub reasoning_model: Option<String>,
}
