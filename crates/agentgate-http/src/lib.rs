//! # Agentgate HTTP Runtime
//!
//! Axum-based gateway runtime in front of an external computation engine.
//! Exposes thread and run management endpoints plus the run-stream endpoint
//! that relays the engine's incremental updates to the client as a live
//! event stream.
//!
//! The interesting behavior lives in [`runtime::executor`] (the run relay)
//! and [`runtime::streaming`] (the wire frame protocol); the rest is
//! routing glue around the stores defined in `agentgate-core`.

pub mod runtime;

pub use runtime::*;
