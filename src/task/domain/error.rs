//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or normalizing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The raw task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyText,

    /// An identifier value is empty after trimming.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// Neither the caller nor the extractor supplied a deadline.
    #[error("a deadline is required but none was provided or extracted")]
    MissingDeadline,
}

/// Error returned while parsing priority labels from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
