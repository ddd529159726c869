//! Port contracts for the task pipeline's external collaborators.
//!
//! Ports define infrastructure-agnostic interfaces used by the pipeline:
//! credential verification, structured-field extraction, and keyed document
//! persistence.

pub mod auth;
pub mod extractor;
pub mod store;

pub use auth::{AuthError, Authenticator};
pub use extractor::FieldExtractor;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
