use anyhow::{Context, Result};

/// Client configuration loaded from environment variables.
///
/// The bearer token and chatbot identity are injected here explicitly —
/// nothing in this crate reads cookies or local storage on its own, which
/// keeps the form logic testable in isolation.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub auth_token: String,
    pub resume_webhook_url: String,
    pub chatbot_webhook_url: String,
    pub request_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: require_env("API_BASE_URL")?,
            auth_token: require_env("AUTH_TOKEN")?,
            resume_webhook_url: require_env("RESUME_WEBHOOK_URL")?,
            chatbot_webhook_url: require_env("CHATBOT_WEBHOOK_URL")?,
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
