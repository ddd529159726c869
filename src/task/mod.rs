//! Task ingestion, normalization, ranking, and completion for Taskwright.
//!
//! This module turns raw free-text input into persisted task records. A
//! generative model suggests structured fields; the normalization engine
//! merges them with user input under a strict precedence policy (an explicit
//! user deadline always wins, a configured keyword always forces High
//! priority); the ranking engine orders a user's tasks for display. The
//! module follows hexagonal architecture:
//!
//! - Domain types and the two engines in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The request pipeline in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
