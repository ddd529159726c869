//! Adapter implementations of the task pipeline ports.

pub mod gemini;
pub mod identity;
pub mod memory;
