//! Taskwright: AI-assisted task planning backend.
//!
//! This crate accepts free-text task descriptions, asks a generative model to
//! extract structured fields, merges those fields with user input under a
//! strict precedence policy, and persists the result per user.
//!
//! # Architecture
//!
//! Taskwright follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports (inference API,
//!   identity provider, document store)
//!
//! # Modules
//!
//! - [`task`]: Task normalization, ranking, and the request pipeline
//! - [`api`]: HTTP surface (axum router, DTOs, error mapping)
//! - [`config`]: Environment-driven settings

pub mod api;
pub mod config;
pub mod task;
