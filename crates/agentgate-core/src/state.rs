//! Initial engine state
//!
//! The state object handed to the engine at the start of a run: the
//! normalized message list plus the configuration knobs the engine
//! understands, with fixed defaults for anything the request omits.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default number of initial search queries the engine issues.
pub const DEFAULT_INITIAL_SEARCH_QUERY_COUNT: u32 = 3;
/// Default maximum number of research loops before the engine finalizes.
pub const DEFAULT_MAX_RESEARCH_LOOPS: u32 = 3;
/// Default reasoning model identifier.
pub const DEFAULT_REASONING_MODEL: &str = "gemini-1.5-flash-latest";

fn default_query_count() -> u32 {
    DEFAULT_INITIAL_SEARCH_QUERY_COUNT
}

fn default_research_loops() -> u32 {
    DEFAULT_MAX_RESEARCH_LOOPS
}

fn default_reasoning_model() -> String {
    DEFAULT_REASONING_MODEL.to_string()
}

/// Initial conversation state consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    #[serde(default)]
    pub messages: Vec<Value>,
    #[serde(default = "default_query_count")]
    pub initial_search_query_count: u32,
    #[serde(default = "default_research_loops")]
    pub max_research_loops: u32,
    #[serde(default = "default_reasoning_model")]
    pub reasoning_model: String,
}

impl EngineState {
    /// Build a state from a message list plus optional knob overrides.
    pub fn new(
        messages: Vec<Value>,
        initial_search_query_count: Option<u32>,
        max_research_loops: Option<u32>,
        reasoning_model: Option<String>,
    ) -> Self {
        Self {
            messages,
            initial_search_query_count: initial_search_query_count
                .unwrap_or(DEFAULT_INITIAL_SEARCH_QUERY_COUNT),
            max_research_loops: max_research_loops.unwrap_or(DEFAULT_MAX_RESEARCH_LOOPS),
            reasoning_model: reasoning_model.unwrap_or_else(default_reasoning_model),
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(Vec::new(), None, None, None)
    }
}
