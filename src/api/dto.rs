//! Wire shapes for the task API.
//!
//! Field names are camelCase to match the clients this service was built
//! for. Deadlines arrive as ISO-8601 strings; timezone-naive values are
//! interpreted as UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::domain::{parse_utc, Priority, RawTaskInput, Task};

use super::error::ApiError;

/// Body of `POST /api/v1/tasks`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Free-text task description; must be non-empty.
    pub raw_input: String,
    /// Optional explicit deadline, ISO-8601.
    #[serde(default)]
    pub deadline: Option<String>,
}

impl CreateTaskRequest {
    /// Validates the request into domain input.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the text is empty or the deadline
    /// string does not parse.
    pub fn into_raw_input(self) -> Result<RawTaskInput, ApiError> {
        let explicit_deadline = match self.deadline.as_deref() {
            Some(value) => Some(
                parse_utc(value)
                    .ok_or_else(|| ApiError::validation(format!("invalid deadline: {value}")))?,
            ),
            None => None,
        };
        RawTaskInput::new(self.raw_input, explicit_deadline)
            .map_err(|err| ApiError::validation(err.to_string()))
    }
}

/// Body of `PUT /api/v1/tasks/{id}/complete`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CompleteTaskRequest {
    /// Desired completion flag; mandatory.
    pub completed: bool,
}

/// A task as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Store-assigned identifier.
    pub id: String,
    /// Owning user identity.
    pub user_id: String,
    /// The raw text as submitted.
    pub original_input: String,
    /// Resolved display description.
    pub processed_description: String,
    /// Resolved priority.
    pub priority: Priority,
    /// Tags in extractor order.
    pub tags: Vec<String>,
    /// Deadline, UTC.
    pub deadline: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion flag.
    pub completed: bool,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            user_id: task.owner_id().as_str().to_owned(),
            original_input: task.original_text().to_owned(),
            processed_description: task.description().to_owned(),
            priority: task.priority(),
            tags: task.tags().to_vec(),
            deadline: task.deadline(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
            completed: task.completed(),
        }
    }
}
