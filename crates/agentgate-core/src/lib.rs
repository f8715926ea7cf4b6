//! # Agentgate Core
//!
//! Core types for the agentgate gateway: thread and run records, validated
//! identifiers, the in-memory stores, and the adapter contract for the
//! external computation engine.
//!
//! The gateway itself is deliberately thin. Everything with real behavior —
//! the thread/run lifecycle and the event-relay protocol — is built on the
//! pieces defined here:
//!
//! - **[Thread] / [Run]**: the two record types the gateway manages
//! - **[ThreadStore] / [RunStore]**: injected repository abstractions backed
//!   by concurrency-safe in-memory maps
//! - **[EngineAdapter]**: the boundary to the external engine, consumed as a
//!   lazy stream of opaque update payloads
//! - **[EngineState]**: the initial conversation state handed to the engine

/// Boundary contract to the external computation engine.
pub mod engine;
/// Gateway error taxonomy.
pub mod error;
/// Validated identifier newtypes.
pub mod identifiers;
/// Typed chat message representation and input normalization.
pub mod message;
/// Run records and status lifecycle.
pub mod run;
/// Initial engine state and configuration defaults.
pub mod state;
/// Thread and run repositories with in-memory implementations.
pub mod store;
/// Thread records.
pub mod thread;

pub use engine::{EngineAdapter, EngineError, ScriptedEngine, UpdateEvent, UpdateStream};
pub use error::GatewayError;
pub use identifiers::{IdValidationError, RunId, ThreadId};
pub use message::{ChatMessage, normalize_messages};
pub use run::{Run, RunStatus};
pub use state::{
    DEFAULT_INITIAL_SEARCH_QUERY_COUNT, DEFAULT_MAX_RESEARCH_LOOPS, DEFAULT_REASONING_MODEL,
    EngineState,
};
pub use store::{InMemoryRunStore, InMemoryThreadStore, RunStore, ThreadStore};
pub use thread::Thread;
