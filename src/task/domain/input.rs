//! Per-request input values consumed by the normalization engine.

use super::{Priority, TaskDomainError};
use chrono::{DateTime, Utc};

/// Raw creation request: free text plus an optional explicit deadline.
///
/// Created once per request and never persisted as-is. The text is kept
/// verbatim; only emptiness is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTaskInput {
    text: String,
    explicit_deadline: Option<DateTime<Utc>>,
}

impl RawTaskInput {
    /// Creates a validated raw input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyText`] when the text is empty after
    /// trimming.
    pub fn new(
        text: impl Into<String>,
        explicit_deadline: Option<DateTime<Utc>>,
    ) -> Result<Self, TaskDomainError> {
        let owned = text.into();
        if owned.trim().is_empty() {
            return Err(TaskDomainError::EmptyText);
        }
        Ok(Self {
            text: owned,
            explicit_deadline,
        })
    }

    /// Returns the raw text verbatim.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the user-supplied deadline, if any.
    #[must_use]
    pub const fn explicit_deadline(&self) -> Option<DateTime<Utc>> {
        self.explicit_deadline
    }
}

/// Candidate structured fields produced by the extraction collaborator.
///
/// Ephemeral: produced once per creation request and consumed by
/// [`normalize`](super::normalize). Every field is best-effort; the
/// normalization engine decides what survives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Rephrased task description, when the model produced one.
    pub description: Option<String>,
    /// Deadline the model inferred from the text, normalized to UTC.
    pub deadline: Option<DateTime<Utc>>,
    /// Suggested tags in the order the model emitted them.
    pub tags: Vec<String>,
    /// Suggested priority level.
    pub priority_hint: Option<Priority>,
}

impl ExtractedFields {
    /// Returns the degraded result used when extraction fails entirely:
    /// the raw text as description, Medium priority, no deadline, no tags.
    ///
    /// Extraction failures must never block task creation by themselves,
    /// so adapters fall back to this instead of returning an error.
    #[must_use]
    pub fn fallback_for(raw_text: &str) -> Self {
        Self {
            description: Some(raw_text.to_owned()),
            deadline: None,
            tags: Vec::new(),
            priority_hint: Some(Priority::Medium),
        }
    }
}
