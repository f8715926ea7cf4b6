//! Thread management HTTP handlers

use axum::{
    extract::{Path, State},
    response::Json,
};

use agentgate_core::ThreadId;

use crate::runtime::{
    GatewayRuntime,
    error::ApiError,
    types::{CreateThreadRequest, ThreadRecordResponse, ThreadResponse},
};

/// POST /threads - Create a new conversation thread
#[utoipa::path(
    post,
    path = "/threads",
    request_body = CreateThreadRequest,
    responses(
        (status = 200, description = "Thread created", body = ThreadResponse)
    )
)]
pub async fn create_thread(
    State(runtime): State<GatewayRuntime>,
    Json(request): Json<CreateThreadRequest>,
) -> Json<ThreadResponse> {
    let thread = runtime
        .threads
        .create_thread(request.metadata.unwrap_or_default())
        .await;
    tracing::info!(thread_id = %thread.thread_id, "thread created");
    Json(ThreadResponse::from(thread))
}

/// GET /threads/{thread_id} - Look up a thread record
#[utoipa::path(
    get,
    path = "/threads/{thread_id}",
    params(
        ("thread_id" = String, Path, description = "Thread identifier")
    ),
    responses(
        (status = 200, description = "Thread record", body = ThreadRecordResponse),
        (status = 404, description = "Thread not found", body = crate::runtime::error::ErrorResponse)
    )
)]
pub async fn get_thread(
    State(runtime): State<GatewayRuntime>,
    Path(thread_id): Path<String>,
) -> Result<Json<ThreadRecordResponse>, ApiError> {
    let thread_id = ThreadId::parse(&thread_id).map_err(ApiError::invalid_input)?;
    let thread = runtime.threads.get_thread(&thread_id).await?;
    Ok(Json(ThreadRecordResponse::from(thread)))
}
