//! Ranking engine: deterministic display order over a user's tasks.

use super::Task;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;

/// Sorts tasks into display order. Pure and total.
///
/// The key is lexicographic and ascending over three fields: priority
/// weight (High before Medium before Low), deadline (earliest first), and
/// creation timestamp descending (newer first) as the tie-break. The order
/// is deterministic and idempotent; the sort itself is stable.
#[must_use]
pub fn rank(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by_key(sort_key);
    tasks
}

fn sort_key(task: &Task) -> (u8, DateTime<Utc>, Reverse<DateTime<Utc>>) {
    (
        task.priority().weight(),
        task.deadline(),
        Reverse(task.created_at()),
    )
}
