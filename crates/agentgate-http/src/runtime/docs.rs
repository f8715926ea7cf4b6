//! API documentation endpoint
//!
//! Serves the OpenAPI specification for the gateway as JSON. No bundled UI;
//! point any OpenAPI viewer at `/api-docs/openapi.json`.

use axum::response::Json;
use utoipa::OpenApi;

/// GET /api-docs/openapi.json - OpenAPI specification endpoint
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::runtime::handlers::health::health_check,
            crate::runtime::handlers::threads::create_thread,
            crate::runtime::handlers::threads::get_thread,
            crate::runtime::handlers::runs::create_run_stream,
            crate::runtime::handlers::runs::get_run,
        ),
        components(schemas(
            crate::runtime::types::CreateThreadRequest,
            crate::runtime::types::CreateRunRequest,
            crate::runtime::types::RunInput,
            crate::runtime::types::ThreadResponse,
            crate::runtime::types::ThreadRecordResponse,
            crate::runtime::types::RunResponse,
            crate::runtime::error::ErrorResponse,
        )),
        info(
            title = "Agentgate API",
            description = "Thread/run gateway in front of an external agent graph"
        )
    )]
    struct ApiDoc;

    Json(ApiDoc::openapi())
}
