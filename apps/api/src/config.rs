use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The provider API key is deliberately optional here: its absence is a
/// per-request configuration error (500), not a startup failure, so a
/// misconfigured deployment still answers health checks.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    /// Override for the chat-completion endpoint base URL (local providers, tests).
    pub llm_base_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            llm_base_url: std::env::var("LLM_BASE_URL").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
