//! Request orchestration for task creation, listing, and completion.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::task::{
    domain::{
        normalize, rank, CompletionUpdate, HighPriorityKeywords, RawTaskInput, Task,
        TaskDomainError, TaskId,
    },
    ports::{AuthError, Authenticator, FieldExtractor, TaskStore, TaskStoreError},
};

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors surfaced by the pipeline, one variant per externally visible
/// outcome class.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    /// The credential was missing, invalid, or expired.
    #[error("authentication failed")]
    Unauthenticated,

    /// Request input failed a mandatory invariant.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No task exists under the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The authenticated caller does not own the task.
    #[error("task {0} belongs to another user")]
    Forbidden(TaskId),

    /// An external dependency could not be reached.
    #[error("dependency unavailable: {0}")]
    Unavailable(String),

    /// Unclassified failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for PipelineError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated => Self::Unauthenticated,
            AuthError::Unavailable(reason) => Self::Unavailable(reason),
        }
    }
}

impl From<TaskStoreError> for PipelineError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::Unavailable(reason) => Self::Unavailable(reason),
            TaskStoreError::NotFound(id) => Self::NotFound(id),
            TaskStoreError::Internal(source) => Self::Internal(source.to_string()),
        }
    }
}

impl From<TaskDomainError> for PipelineError {
    fn from(err: TaskDomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Sequences the three external collaborators per API call.
///
/// Constructed once at process startup with its dependencies injected;
/// every operation is an independent, stateless request/response
/// transaction. No retries: a failed external call fails the request.
#[derive(Clone)]
pub struct TaskPipeline {
    authenticator: Arc<dyn Authenticator>,
    extractor: Arc<dyn FieldExtractor>,
    store: Arc<dyn TaskStore>,
    clock: Arc<dyn Clock + Send + Sync>,
    keywords: HighPriorityKeywords,
}

impl TaskPipeline {
    /// Creates a pipeline over the given collaborators.
    #[must_use]
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        extractor: Arc<dyn FieldExtractor>,
        store: Arc<dyn TaskStore>,
        clock: Arc<dyn Clock + Send + Sync>,
        keywords: HighPriorityKeywords,
    ) -> Self {
        if keywords.is_empty() {
            warn!("no high-priority keywords configured; the override rule is inert");
        }
        Self {
            authenticator,
            extractor,
            store,
            clock,
            keywords,
        }
    }

    /// Creates a task from raw input.
    ///
    /// Extraction trouble degrades inside the extractor and never aborts
    /// the pipeline; it can only surface indirectly as a missing-deadline
    /// validation error when the caller supplied none either.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Unauthenticated`] for a bad credential,
    /// [`PipelineError::Validation`] when no deadline is resolvable, and
    /// [`PipelineError::Unavailable`] when the store is unreachable.
    pub async fn create_task(
        &self,
        bearer_token: &str,
        raw: &RawTaskInput,
    ) -> PipelineResult<Task> {
        let owner_id = self.authenticator.verify(bearer_token).await?;
        let now = self.clock.utc();

        let extracted = self.extractor.infer(raw.text(), now).await;
        debug!(user = %owner_id, ?extracted, "extraction completed");

        let candidate = normalize(owner_id, raw, extracted, &self.keywords, now)?;
        let task = self.store.insert(candidate).await?;
        info!(task = %task.id(), user = %task.owner_id(), priority = task.priority().as_str(), "task created");
        Ok(task)
    }

    /// Returns the caller's tasks in display order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Unauthenticated`] for a bad credential and
    /// [`PipelineError::Unavailable`] when the store is unreachable.
    pub async fn list_tasks(&self, bearer_token: &str) -> PipelineResult<Vec<Task>> {
        let owner_id = self.authenticator.verify(bearer_token).await?;
        let tasks = self.store.query_owner(&owner_id).await?;
        debug!(user = %owner_id, count = tasks.len(), "tasks fetched");
        Ok(rank(tasks))
    }

    /// Sets the completion flag on one of the caller's tasks.
    ///
    /// Existence is checked before ownership: an unknown identifier yields
    /// `NotFound` regardless of the caller. No mutation happens on an
    /// ownership mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Unauthenticated`], [`PipelineError::NotFound`],
    /// [`PipelineError::Forbidden`], or [`PipelineError::Unavailable`] per
    /// the guard that fails.
    pub async fn complete_task(
        &self,
        bearer_token: &str,
        id: TaskId,
        update: CompletionUpdate,
    ) -> PipelineResult<Task> {
        let caller = self.authenticator.verify(bearer_token).await?;
        let task = self
            .store
            .get(&id)
            .await?
            .ok_or_else(|| PipelineError::NotFound(id.clone()))?;

        if task.owner_id() != &caller {
            warn!(task = %id, caller = %caller, "completion denied: caller is not the owner");
            return Err(PipelineError::Forbidden(id));
        }

        let updated = self
            .store
            .update_completion(&id, update, self.clock.utc())
            .await?;
        info!(task = %id, completed = updated.completed(), "task completion updated");
        Ok(updated)
    }
}
