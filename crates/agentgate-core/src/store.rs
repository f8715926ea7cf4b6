//! Thread and run repositories
//!
//! The gateway talks to storage through the [`ThreadStore`] and [`RunStore`]
//! traits so the HTTP layer stays decoupled from the storage choice and the
//! relay can be tested against in-memory fakes. The shipped implementations
//! are process-local maps behind `tokio::sync::RwLock`; every operation
//! takes the lock for exactly one map access, and no cross-store
//! transactions exist (thread creation and run creation are never required
//! to be atomic with each other).
//!
//! Neither store supports deletion: record lifetime equals process lifetime.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::GatewayError;
use crate::identifiers::{RunId, ThreadId};
use crate::run::{Run, RunStatus};
use crate::thread::Thread;

/// Repository of conversation threads.
#[async_trait]
pub trait ThreadStore: Send + Sync {
    /// Create a thread with a fresh identifier. Pure insert; never fails.
    async fn create_thread(&self, metadata: Map<String, Value>) -> Thread;

    /// Look up a thread by identifier.
    async fn get_thread(&self, thread_id: &ThreadId) -> Result<Thread, GatewayError>;
}

/// Repository of runs.
#[async_trait]
pub trait RunStore: Send + Sync {
    /// Create a pending run under the given thread. The caller validates
    /// that the thread exists before calling this.
    async fn create_run(&self, thread_id: ThreadId) -> Run;

    /// Look up a run by identifier.
    async fn get_run(&self, run_id: &RunId) -> Result<Run, GatewayError>;

    /// Record a status transition for a run. Unknown runs are ignored.
    async fn update_status(&self, run_id: &RunId, status: RunStatus);
}

/// In-memory [`ThreadStore`] backed by a `RwLock<HashMap>`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryThreadStore {
    threads: Arc<RwLock<HashMap<ThreadId, Thread>>>,
}

impl InMemoryThreadStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThreadStore for InMemoryThreadStore {
    async fn create_thread(&self, metadata: Map<String, Value>) -> Thread {
        let thread = Thread::new(metadata);
        let mut threads = self.threads.write().await;
        threads.insert(thread.thread_id.clone(), thread.clone());
        thread
    }

    async fn get_thread(&self, thread_id: &ThreadId) -> Result<Thread, GatewayError> {
        let threads = self.threads.read().await;
        threads
            .get(thread_id)
            .cloned()
            .ok_or_else(|| GatewayError::ThreadNotFound {
                thread_id: thread_id.clone(),
            })
    }
}

/// In-memory [`RunStore`] backed by a `RwLock<HashMap>`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRunStore {
    runs: Arc<RwLock<HashMap<RunId, Run>>>,
}

impl InMemoryRunStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RunStore for InMemoryRunStore {
    async fn create_run(&self, thread_id: ThreadId) -> Run {
        let run = Run::new(thread_id);
        let mut runs = self.runs.write().await;
        runs.insert(run.run_id.clone(), run.clone());
        run
    }

    async fn get_run(&self, run_id: &RunId) -> Result<Run, GatewayError> {
        let runs = self.runs.read().await;
        runs.get(run_id)
            .cloned()
            .ok_or_else(|| GatewayError::RunNotFound {
                run_id: run_id.clone(),
            })
    }

    async fn update_status(&self, run_id: &RunId, status: RunStatus) {
        let mut runs = self.runs.write().await;
        if let Some(run) = runs.get_mut(run_id) {
            run.status = status;
        } else {
            tracing::debug!(run_id = %run_id, ?status, "status update for unknown run ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn created_thread_round_trips_with_metadata() {
        let store = InMemoryThreadStore::new();
        let mut metadata = Map::new();
        metadata.insert("user".to_string(), json!("a"));
        let thread = store.create_thread(metadata.clone()).await;

        let fetched = store.get_thread(&thread.thread_id).await.unwrap();
        assert_eq!(fetched.thread_id, thread.thread_id);
        assert_eq!(fetched.metadata, metadata);
        assert!(fetched.messages.is_empty());
    }

    #[tokio::test]
    async fn repeated_gets_return_identical_records() {
        let store = InMemoryThreadStore::new();
        let thread = store.create_thread(Map::new()).await;
        let first = store.get_thread(&thread.thread_id).await.unwrap();
        let second = store.get_thread(&thread.thread_id).await.unwrap();
        assert_eq!(first.thread_id, second.thread_id);
        assert_eq!(first.metadata, second.metadata);
        assert_eq!(first.created_at, second.created_at);
    }

    #[tokio::test]
    async fn missing_thread_is_not_found() {
        let store = InMemoryThreadStore::new();
        let err = store
            .get_thread(&ThreadId::new_unchecked("missing"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn created_threads_have_unique_ids() {
        let store = InMemoryThreadStore::new();
        let a = store.create_thread(Map::new()).await;
        let b = store.create_thread(Map::new()).await;
        assert_ne!(a.thread_id, b.thread_id);
    }

    #[tokio::test]
    async fn run_status_transitions_are_persisted() {
        let store = InMemoryRunStore::new();
        let run = store.create_run(ThreadId::new_unchecked("t1")).await;
        assert_eq!(run.status, RunStatus::Pending);

        store.update_status(&run.run_id, RunStatus::Streaming).await;
        assert_eq!(
            store.get_run(&run.run_id).await.unwrap().status,
            RunStatus::Streaming
        );

        store.update_status(&run.run_id, RunStatus::Completed).await;
        assert_eq!(
            store.get_run(&run.run_id).await.unwrap().status,
            RunStatus::Completed
        );
    }

    #[tokio::test]
    async fn missing_run_is_not_found() {
        let store = InMemoryRunStore::new();
        let err = store
            .get_run(&RunId::new_unchecked("missing"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn status_update_for_unknown_run_is_ignored() {
        let store = InMemoryRunStore::new();
        // Must not panic or create a phantom record.
        store
            .update_status(&RunId::new_unchecked("ghost"), RunStatus::Failed)
            .await;
        assert!(store.get_run(&RunId::new_unchecked("ghost")).await.is_err());
    }
}
