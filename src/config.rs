//! Environment-driven settings.

use std::env;

/// Default trigger words for the priority override rule.
const DEFAULT_KEYWORDS: &str = "urgent,asap,important,deadline";

/// Process settings, populated from environment variables with defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP server port (`PORT`).
    pub port: u16,
    /// Comma-separated keywords forcing High priority
    /// (`HIGH_PRIORITY_KEYWORDS`).
    pub high_priority_keywords: Vec<String>,
    /// Base URL of the generative-model API (`GEMINI_API_BASE`).
    pub gemini_api_base: String,
    /// Model name used for field extraction (`GEMINI_MODEL`).
    pub gemini_model: String,
    /// API key for the generative-model API (`GEMINI_API_KEY`).
    pub gemini_api_key: Option<String>,
    /// Base URL of the identity provider (`IDENTITY_API_BASE`).
    pub identity_api_base: String,
    /// API key for the identity provider (`IDENTITY_API_KEY`).
    pub identity_api_key: Option<String>,
    /// Static `token=user` pairs enabling the local-run authenticator
    /// (`DEV_TOKENS`, comma-separated). Empty in production.
    pub dev_tokens: Vec<(String, String)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(8000),
            high_priority_keywords: split_csv(
                &env::var("HIGH_PRIORITY_KEYWORDS").unwrap_or_else(|_| DEFAULT_KEYWORDS.to_owned()),
            ),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_owned()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash-001".to_owned()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()),
            identity_api_base: env::var("IDENTITY_API_BASE")
                .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com".to_owned()),
            identity_api_key: env::var("IDENTITY_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            dev_tokens: env::var("DEV_TOKENS")
                .ok()
                .map(|value| parse_token_pairs(&value))
                .unwrap_or_default(),
        }
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|entry| entry.trim().to_owned())
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn parse_token_pairs(value: &str) -> Vec<(String, String)> {
    value
        .split(',')
        .filter_map(|pair| pair.trim().split_once('='))
        .map(|(token, user)| (token.to_owned(), user.to_owned()))
        .filter(|(token, user)| !token.is_empty() && !user.is_empty())
        .collect()
}
