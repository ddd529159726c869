//! Taskwright API server binary.
//!
//! Constructs the external collaborators once at startup and injects them
//! into the pipeline; a collaborator that cannot be constructed is a fatal
//! startup error, never a silently degraded global.

use anyhow::{Context, Result};
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taskwright::api::{build_router, AppState};
use taskwright::config::Settings;
use taskwright::task::{
    adapters::{
        gemini::GeminiExtractor,
        identity::HttpAuthenticator,
        memory::{InMemoryTaskStore, StaticTokenAuthenticator},
    },
    domain::{HighPriorityKeywords, UserId},
    ports::Authenticator,
    services::TaskPipeline,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("taskwright=info".parse()?))
        .init();

    let settings = Settings::default();
    info!(port = settings.port, model = %settings.gemini_model, "starting Taskwright API");

    let authenticator = build_authenticator(&settings)?;

    let gemini_key = settings
        .gemini_api_key
        .clone()
        .context("GEMINI_API_KEY must be set")?;
    let extractor = Arc::new(GeminiExtractor::new(
        &settings.gemini_api_base,
        &settings.gemini_model,
        gemini_key,
    ));

    let store = Arc::new(InMemoryTaskStore::new());
    let keywords = HighPriorityKeywords::new(settings.high_priority_keywords.clone());

    let pipeline = TaskPipeline::new(
        authenticator,
        extractor,
        store,
        Arc::new(DefaultClock),
        keywords,
    );
    let app = build_router(AppState {
        pipeline: Arc::new(pipeline),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind listen address")?;
    info!(port = settings.port, "Taskwright API listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Selects the authenticator: static dev tokens when configured, otherwise
/// the identity provider (whose key is then mandatory).
fn build_authenticator(settings: &Settings) -> Result<Arc<dyn Authenticator>> {
    if settings.dev_tokens.is_empty() {
        let identity_key = settings
            .identity_api_key
            .clone()
            .context("IDENTITY_API_KEY must be set (or DEV_TOKENS for local runs)")?;
        return Ok(Arc::new(HttpAuthenticator::new(
            &settings.identity_api_base,
            identity_key,
        )));
    }

    warn!(
        count = settings.dev_tokens.len(),
        "DEV_TOKENS set; using the static token authenticator"
    );
    let mut tokens = Vec::with_capacity(settings.dev_tokens.len());
    for (token, user) in &settings.dev_tokens {
        let user_id = UserId::new(user.clone()).context("invalid DEV_TOKENS user id")?;
        tokens.push((token.clone(), user_id));
    }
    Ok(Arc::new(StaticTokenAuthenticator::new(tokens)))
}
