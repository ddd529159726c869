//! In-memory adapters for tests and local runs.

mod auth;
mod store;

pub use auth::StaticTokenAuthenticator;
pub use store::InMemoryTaskStore;
