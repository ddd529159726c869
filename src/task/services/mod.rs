//! Application services orchestrating the task pipeline.

mod pipeline;

pub use pipeline::{PipelineError, PipelineResult, TaskPipeline};
