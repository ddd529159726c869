//! Request handlers for the task API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
};
use serde_json::{json, Value};

use crate::task::{
    domain::{CompletionUpdate, TaskId},
    services::PipelineError,
};

use super::{
    dto::{CompleteTaskRequest, CreateTaskRequest, TaskResponse},
    error::ApiError,
    AppState,
};

/// `GET /` health check.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Taskwright API" }))
}

/// `POST /api/v1/tasks`: create a task from raw input.
#[expect(
    clippy::needless_pass_by_value,
    reason = "axum extracts state and headers by value"
)]
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let token = bearer_token(&headers)?;
    let Json(request) = payload.map_err(reject_body)?;
    let raw = request.into_raw_input()?;
    let task = state.pipeline.create_task(token, &raw).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// `GET /api/v1/tasks`: list the caller's tasks in display order.
#[expect(
    clippy::needless_pass_by_value,
    reason = "axum extracts state and headers by value"
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let token = bearer_token(&headers)?;
    let tasks = state.pipeline.list_tasks(token).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// `PUT /api/v1/tasks/{id}/complete`: set a task's completion flag.
#[expect(
    clippy::needless_pass_by_value,
    reason = "axum extracts state and headers by value"
)]
pub async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<CompleteTaskRequest>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let token = bearer_token(&headers)?;
    let Json(request) = payload.map_err(reject_body)?;
    let task_id = TaskId::new(id).map_err(|err| ApiError::validation(err.to_string()))?;
    let update = CompletionUpdate {
        completed: request.completed,
    };
    let task = state.pipeline.complete_task(token, task_id, update).await?;
    Ok(Json(task.into()))
}

/// Extracts the bearer token, rejecting absent or malformed headers
/// without consulting the authenticator.
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::from(PipelineError::Unauthenticated))
}

/// Maps a body deserialization rejection to a 400 validation error.
fn reject_body(rejection: JsonRejection) -> ApiError {
    ApiError::validation(rejection.body_text())
}
