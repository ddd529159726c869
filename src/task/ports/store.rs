//! Task store port: keyed document persistence with owner filtering.

use crate::task::domain::{CompletionUpdate, NewTask, Task, TaskId, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Keyed document persistence contract.
///
/// No delete operation exists; tasks only ever gain a completion flag.
/// Concurrent completion updates on the same identifier resolve by the
/// store's last-write-wins semantics.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a normalized candidate, assigning its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] when the store cannot be
    /// reached.
    async fn insert(&self, candidate: NewTask) -> TaskStoreResult<Task>;

    /// Fetches a task by identifier.
    ///
    /// Returns `None` when the identifier is unknown.
    async fn get(&self, id: &TaskId) -> TaskStoreResult<Option<Task>>;

    /// Returns every task owned by the given user, in no guaranteed order.
    async fn query_owner(&self, owner_id: &UserId) -> TaskStoreResult<Vec<Task>>;

    /// Applies a completion update to a single document and returns the
    /// updated task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the identifier is unknown.
    async fn update_completion(
        &self,
        id: &TaskId,
        update: CompletionUpdate,
        updated_at: DateTime<Utc>,
    ) -> TaskStoreResult<Task>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The store connection could not be established.
    #[error("task store unavailable: {0}")]
    Unavailable(String),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Store-layer failure.
    #[error("store error: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a store-layer error.
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Arc::new(err))
    }
}
