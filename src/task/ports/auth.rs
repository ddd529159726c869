//! Access control port: maps an opaque credential to a user identity.

use crate::task::domain::UserId;
use async_trait::async_trait;
use thiserror::Error;

/// Credential verification contract.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verifies a bearer token and returns the owning user identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthenticated`] when the token is missing,
    /// malformed, expired, or rejected by the identity provider, and
    /// [`AuthError::Unavailable`] when the provider cannot be reached.
    async fn verify(&self, bearer_token: &str) -> Result<UserId, AuthError>;
}

/// Errors returned by authenticator implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The credential was rejected.
    #[error("credential rejected")]
    Unauthenticated,

    /// The identity provider could not be reached.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}
