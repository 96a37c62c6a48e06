use crate::config::Config;
use crate::llm_client::{CompletionConfig, LlmClient};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Fixed generation parameters applied to every snapshot section.
    pub completion: CompletionConfig,
    pub config: Config,
}
