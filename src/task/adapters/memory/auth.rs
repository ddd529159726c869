//! Static token authenticator for tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::task::{
    domain::UserId,
    ports::{AuthError, Authenticator},
};

/// Authenticator backed by a fixed token-to-user table.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: HashMap<String, UserId>,
}

impl StaticTokenAuthenticator {
    /// Creates an authenticator from token/user pairs.
    #[must_use]
    pub fn new(tokens: impl IntoIterator<Item = (String, UserId)>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Convenience constructor for a single accepted token.
    #[must_use]
    pub fn single(token: impl Into<String>, user: UserId) -> Self {
        Self {
            tokens: HashMap::from([(token.into(), user)]),
        }
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn verify(&self, bearer_token: &str) -> Result<UserId, AuthError> {
        self.tokens
            .get(bearer_token)
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}
