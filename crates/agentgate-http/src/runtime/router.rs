//! HTTP router configuration
//!
//! Route registration and middleware for the gateway runtime.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::runtime::{
    GatewayRuntime,
    docs::openapi_spec,
    handlers::{create_run_stream, create_thread, get_run, get_thread, health_check},
};

impl GatewayRuntime {
    /// Create the axum router with all endpoints and middleware.
    pub fn router(self) -> Router {
        let enable_cors = self.config.enable_cors;

        let mut router = Router::new()
            .route("/threads", post(create_thread))
            .route("/threads/{thread_id}", get(get_thread))
            .route("/threads/{thread_id}/runs/stream", post(create_run_stream))
            .route("/threads/{thread_id}/runs/{run_id}", get(get_run))
            .route("/health", get(health_check))
            .route("/api-docs/openapi.json", get(openapi_spec))
            .with_state(self)
            .layer(TraceLayer::new_for_http());

        if enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }
}
