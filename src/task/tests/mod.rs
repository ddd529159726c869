//! Unit tests for the task domain and pipeline.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod normalize_tests;
mod pipeline_tests;
