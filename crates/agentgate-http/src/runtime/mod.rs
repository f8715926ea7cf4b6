//! # Gateway Runtime
//!
//! The HTTP execution layer of the gateway. [`GatewayRuntime`] holds the
//! injected stores and the engine adapter; the router wires the handlers to
//! them, and the executor drives one run from request to terminal frame.
//!
//! ## Request flow
//!
//! client -> router -> handler -> stores -> executor -> engine adapter
//! -> frame stream -> client (persistent SSE response)

/// Gateway runtime configuration.
pub mod config;
/// OpenAPI specification endpoint.
pub mod docs;
/// Unified error handling: wire codes, structured responses, status mapping.
pub mod error;
/// Run executor: drives one engine invocation and relays its updates.
pub mod executor;
/// HTTP request handlers organized by resource.
pub mod handlers;
/// Shared runtime state for the HTTP server.
pub mod http;
/// HTTP router configuration and route registration.
pub mod router;
/// Wire frame protocol and SSE response assembly.
pub mod streaming;
/// Request and response DTOs.
pub mod types;

pub use config::GatewayConfig;
pub use error::{ApiError, ErrorCode, ErrorResponse};
pub use http::GatewayRuntime;
pub use streaming::{FrameKind, RunStreamFrame};
