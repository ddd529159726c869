//! Persisted task entity and its mutation command.

use super::{Priority, TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized task candidate awaiting persistence.
///
/// Carries every [`Task`] field except the identifier, which the backing
/// store assigns on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Identity of the creating user; immutable after creation.
    pub owner_id: UserId,
    /// The raw text as submitted.
    pub original_text: String,
    /// Resolved display description.
    pub description: String,
    /// Resolved priority after the keyword override.
    pub priority: Priority,
    /// Tags in extractor order; not deduplicated.
    pub tags: Vec<String>,
    /// Resolved deadline, always present and UTC.
    pub deadline: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp; equals `created_at` at creation.
    pub updated_at: DateTime<Utc>,
}

/// Persisted task record.
///
/// Only `completed` and `updated_at` change after creation; there is no
/// delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    original_text: String,
    description: String,
    priority: Priority,
    tags: Vec<String>,
    deadline: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed: bool,
}

impl Task {
    /// Assembles a persisted task from a store-assigned identifier and a
    /// normalized candidate. New tasks start incomplete.
    #[must_use]
    pub fn assemble(id: TaskId, candidate: NewTask) -> Self {
        Self {
            id,
            owner_id: candidate.owner_id,
            original_text: candidate.original_text,
            description: candidate.description,
            priority: candidate.priority,
            tags: candidate.tags,
            deadline: candidate.deadline,
            created_at: candidate.created_at,
            updated_at: candidate.updated_at,
            completed: false,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning user identity.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the raw text as submitted.
    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Returns the resolved display description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the resolved priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the tags in extractor order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Applies a completion update, touching `updated_at`.
    pub fn apply_completion(&mut self, update: CompletionUpdate, updated_at: DateTime<Utc>) {
        self.completed = update.completed;
        self.updated_at = updated_at;
    }
}

/// Typed command for the single permitted post-creation mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionUpdate {
    /// Desired completion flag.
    pub completed: bool,
}
