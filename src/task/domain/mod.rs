//! Domain model for task normalization and ranking.
//!
//! The task domain models free-text task creation, deadline resolution,
//! priority overrides, and display ordering while keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod input;
mod normalize;
mod priority;
mod rank;
mod task;
mod timestamp;

pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::{TaskId, UserId};
pub use input::{ExtractedFields, RawTaskInput};
pub use normalize::normalize;
pub use priority::{HighPriorityKeywords, Priority};
pub use rank::rank;
pub use task::{CompletionUpdate, NewTask, Task};
pub use timestamp::parse_utc;
