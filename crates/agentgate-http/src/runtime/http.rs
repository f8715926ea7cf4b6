//! Shared runtime state for the HTTP gateway
//!
//! [`GatewayRuntime`] is the axum state handed to every handler: the two
//! injected stores, the engine adapter, and the runtime configuration. The
//! default constructor wires up the in-memory stores; tests and embedders
//! can inject their own.

use std::sync::Arc;

use agentgate_core::{EngineAdapter, InMemoryRunStore, InMemoryThreadStore, RunStore, ThreadStore};

use crate::runtime::config::GatewayConfig;

/// HTTP server state: stores, engine adapter, and configuration.
#[derive(Clone)]
pub struct GatewayRuntime {
    pub threads: Arc<dyn ThreadStore>,
    pub runs: Arc<dyn RunStore>,
    pub engine: Arc<dyn EngineAdapter>,
    pub config: GatewayConfig,
}

impl GatewayRuntime {
    /// Create a runtime with in-memory stores and default configuration.
    pub fn new(engine: Arc<dyn EngineAdapter>) -> Self {
        Self::with_config(engine, GatewayConfig::default())
    }

    /// Create a runtime with in-memory stores and custom configuration.
    pub fn with_config(engine: Arc<dyn EngineAdapter>, config: GatewayConfig) -> Self {
        Self::with_stores(
            Arc::new(InMemoryThreadStore::new()),
            Arc::new(InMemoryRunStore::new()),
            engine,
            config,
        )
    }

    /// Create a runtime with injected store implementations.
    pub fn with_stores(
        threads: Arc<dyn ThreadStore>,
        runs: Arc<dyn RunStore>,
        engine: Arc<dyn EngineAdapter>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            threads,
            runs,
            engine,
            config,
        }
    }
}
