//! Run HTTP handlers
//!
//! `create_run_stream` is the gateway's core endpoint: it validates the
//! owning thread before committing to a stream, persists the run record,
//! builds the initial engine state from the request, and hands off to the
//! executor. Everything after the handler returns flows through the frame
//! channel.

use axum::{
    extract::{Path, State},
    response::{Json, Response},
};

use agentgate_core::{EngineState, GatewayError, RunId, ThreadId, normalize_messages};

use crate::runtime::{
    GatewayRuntime,
    error::ApiError,
    executor,
    streaming,
    types::{CreateRunRequest, RunResponse},
};

/// POST /threads/{thread_id}/runs/stream - Create a run and stream its events
#[utoipa::path(
    post,
    path = "/threads/{thread_id}/runs/stream",
    params(
        ("thread_id" = String, Path, description = "Owning thread identifier")
    ),
    request_body = CreateRunRequest,
    responses(
        (status = 200, description = "Server-sent event stream of run frames"),
        (status = 404, description = "Thread not found", body = crate::runtime::error::ErrorResponse)
    )
)]
pub async fn create_run_stream(
    State(runtime): State<GatewayRuntime>,
    Path(thread_id): Path<String>,
    Json(request): Json<CreateRunRequest>,
) -> Result<Response, ApiError> {
    let thread_id = ThreadId::parse(&thread_id).map_err(ApiError::invalid_input)?;

    // Missing threads surface as a synchronous 404, never as a streamed
    // error frame.
    runtime.threads.get_thread(&thread_id).await?;

    let run = runtime.runs.create_run(thread_id.clone()).await;
    let input = request.input;
    let state = EngineState::new(
        normalize_messages(input.messages),
        input.initial_search_query_count,
        input.max_research_loops,
        input.reasoning_model,
    );

    tracing::info!(
        thread_id = %thread_id,
        run_id = %run.run_id,
        messages = state.messages.len(),
        "run stream opened"
    );

    let frames = executor::spawn_relay(
        runtime.runs.clone(),
        runtime.engine.clone(),
        run.run_id,
        state,
        runtime.config.stream_channel_capacity,
    );
    Ok(streaming::relay_sse_response(
        frames,
        runtime.config.keep_alive_interval,
    ))
}

/// GET /threads/{thread_id}/runs/{run_id} - Look up a run record
#[utoipa::path(
    get,
    path = "/threads/{thread_id}/runs/{run_id}",
    params(
        ("thread_id" = String, Path, description = "Owning thread identifier"),
        ("run_id" = String, Path, description = "Run identifier")
    ),
    responses(
        (status = 200, description = "Run record", body = RunResponse),
        (status = 404, description = "Thread or run not found", body = crate::runtime::error::ErrorResponse)
    )
)]
pub async fn get_run(
    State(runtime): State<GatewayRuntime>,
    Path((thread_id, run_id)): Path<(String, String)>,
) -> Result<Json<RunResponse>, ApiError> {
    let thread_id = ThreadId::parse(&thread_id).map_err(ApiError::invalid_input)?;
    let run_id = RunId::parse(&run_id).map_err(ApiError::invalid_input)?;

    runtime.threads.get_thread(&thread_id).await?;
    let run = runtime.runs.get_run(&run_id).await?;
    // A run addressed under the wrong thread is indistinguishable from a
    // missing one.
    if run.thread_id != thread_id {
        return Err(GatewayError::RunNotFound { run_id }.into());
    }
    Ok(Json(RunResponse::from(run)))
}
