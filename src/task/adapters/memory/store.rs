//! Thread-safe in-memory task store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{CompletionUpdate, NewTask, Task, TaskId, UserId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// In-memory keyed document store with an owner index.
///
/// Assigns UUID string identifiers on insert, mirroring how a hosted
/// document database would. Shared freely via its internal `Arc`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    tasks: HashMap<TaskId, Task>,
    owner_index: HashMap<UserId, Vec<TaskId>>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: &impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::internal(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, candidate: NewTask) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let id = TaskId::generate();
        let task = Task::assemble(id.clone(), candidate);
        state
            .owner_index
            .entry(task.owner_id().clone())
            .or_default()
            .push(id.clone());
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn get(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn query_owner(&self, owner_id: &UserId) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let tasks = state
            .owner_index
            .get(owner_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn update_completion(
        &self,
        id: &TaskId,
        update: CompletionUpdate,
        updated_at: DateTime<Utc>,
    ) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let task = state
            .tasks
            .get_mut(id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        task.apply_completion(update, updated_at);
        Ok(task.clone())
    }
}
