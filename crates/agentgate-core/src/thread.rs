//! Thread records
//!
//! A thread is a named conversation context holding opaque caller metadata
//! and a message history. Threads are never deleted; storage lifetime equals
//! process lifetime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::identifiers::ThreadId;

/// A conversation thread owned by the thread store.
///
/// `metadata` is an arbitrary caller-supplied mapping and is opaque to the
/// gateway. `messages` holds the thread's conversation turns; the run path
/// does not append history back into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub thread_id: ThreadId,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub messages: Vec<Value>,
    pub created_at: DateTime<Utc>,
}

impl Thread {
    /// Create a fresh thread with a generated identifier and empty history.
    pub fn new(metadata: Map<String, Value>) -> Self {
        Self {
            thread_id: ThreadId::generate(),
            metadata,
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
