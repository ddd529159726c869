//! Pipeline-to-HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::error;

use crate::task::services::PipelineError;

/// HTTP-facing error wrapper around [`PipelineError`].
///
/// Responses carry a `{ "detail": ... }` body alongside the mapped status
/// code. Internal failure details are logged, not exposed.
#[derive(Debug)]
pub struct ApiError(PipelineError);

impl ApiError {
    /// Creates a 400 validation error.
    #[must_use]
    pub fn validation(detail: impl Into<String>) -> Self {
        Self(PipelineError::Validation(detail.into()))
    }

    const fn status(&self) -> StatusCode {
        match self.0 {
            PipelineError::Unauthenticated => StatusCode::UNAUTHORIZED,
            PipelineError::Validation(_) => StatusCode::BAD_REQUEST,
            PipelineError::NotFound(_) => StatusCode::NOT_FOUND,
            PipelineError::Forbidden(_) => StatusCode::FORBIDDEN,
            PipelineError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            PipelineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match &self.0 {
            PipelineError::Unavailable(_) => "A required service is unavailable.".to_owned(),
            PipelineError::Internal(reason) => {
                error!(%reason, "request failed with internal error");
                "Internal server error.".to_owned()
            }
            other => other.to_string(),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "detail": self.detail() }));
        (status, body).into_response()
    }
}
