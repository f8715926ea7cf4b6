//! Gateway runtime configuration

use std::time::Duration;

/// Configuration for the HTTP gateway runtime.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Enable permissive CORS for cross-origin frontend clients.
    pub enable_cors: bool,
    /// Interval between SSE keep-alive comments on open run streams.
    pub keep_alive_interval: Duration,
    /// Capacity of the per-run frame channel between executor and response.
    pub stream_channel_capacity: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            keep_alive_interval: Duration::from_secs(10),
            stream_channel_capacity: 32,
        }
    }
}
