//! HTTP surface for the task pipeline.

pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::task::services::TaskPipeline;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The request pipeline, constructed once at startup.
    pub pipeline: Arc<TaskPipeline>,
}

/// Builds the HTTP router for the task API.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route(
            "/api/v1/tasks",
            post(handlers::create_task).get(handlers::list_tasks),
        )
        .route(
            "/api/v1/tasks/{id}/complete",
            put(handlers::complete_task),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
