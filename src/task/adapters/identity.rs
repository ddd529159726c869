//! Identity-toolkit authenticator adapter.
//!
//! Verifies bearer tokens against an identity provider's `accounts:lookup`
//! endpoint and returns the first matching account identifier. Provider
//! rejections map to `Unauthenticated`; transport failures map to
//! `Unavailable` so the pipeline can answer 503 rather than blaming the
//! caller.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::task::{
    domain::UserId,
    ports::{AuthError, Authenticator},
};

/// Authenticator backed by an identity-toolkit HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpAuthenticator {
    http: reqwest::Client,
    lookup_url: String,
    api_key: String,
}

impl HttpAuthenticator {
    /// Creates an authenticator for the given API base and key.
    #[must_use]
    pub fn new(api_base: impl AsRef<str>, api_key: impl Into<String>) -> Self {
        let lookup_url = format!(
            "{}/v1/accounts:lookup",
            api_base.as_ref().trim_end_matches('/')
        );
        Self {
            http: reqwest::Client::new(),
            lookup_url,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn verify(&self, bearer_token: &str) -> Result<UserId, AuthError> {
        let response = self
            .http
            .post(&self.lookup_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({ "idToken": bearer_token }))
            .send()
            .await
            .map_err(|err| AuthError::Unavailable(err.to_string()))?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "identity provider rejected token");
            return Err(AuthError::Unauthenticated);
        }

        let lookup: LookupResponse = response
            .json()
            .await
            .map_err(|_| AuthError::Unauthenticated)?;
        let account = lookup
            .users
            .into_iter()
            .next()
            .ok_or(AuthError::Unauthenticated)?;
        UserId::new(account.local_id).map_err(|_| AuthError::Unauthenticated)
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<Account>,
}

#[derive(Debug, Deserialize)]
struct Account {
    #[serde(rename = "localId", default)]
    local_id: String,
}
