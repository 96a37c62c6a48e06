/// LLM Client — the single point of entry for all provider calls in the Snapshot API.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// All LLM interactions MUST go through this module.
///
/// Each prompt gets exactly one attempt: no retry, no backoff, no explicit
/// timeout beyond what the network stack enforces. Batch failure semantics
/// (all-or-nothing) depend on this, so do not add retries here.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod completion;

pub use completion::CompletionConfig;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Shown when a provider error payload carries no usable message.
pub const GENERIC_PROVIDER_ERROR: &str = "language model request failed";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned an empty completion")]
    EmptyContent,

    #[error("provider API key is not configured")]
    MissingCredential,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// The single LLM client used by the snapshot relay.
/// Wraps the provider's chat-completions endpoint with bearer authentication.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Points the client at a different chat-completions host (local
    /// providers, mock servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Whether a provider credential is available for calls.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Requests one completion for one prompt. Exactly one attempt.
    ///
    /// A success status with absent or blank completion text is treated the
    /// same as an upstream error.
    pub async fn complete(
        &self,
        config: &CompletionConfig,
        prompt: &str,
    ) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredential)?;

        let request_body = ChatRequest {
            model: &config.model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &config.system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body)
                .unwrap_or_else(|| GENERIC_PROVIDER_ERROR.to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded: {} completion chars", content.len());

        Ok(content)
    }
}

/// Best-effort extraction of the human-readable message from a provider
/// error payload (`{"error": {"message": "..."}}`).
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ProviderError>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_present() {
        let body = r#"{"error": {"message": "model overloaded", "type": "server_error"}}"#;
        assert_eq!(
            extract_error_message(body),
            Some("model overloaded".to_string())
        );
    }

    #[test]
    fn test_extract_error_message_not_json() {
        assert_eq!(extract_error_message("upstream exploded"), None);
    }

    #[test]
    fn test_extract_error_message_missing_field() {
        assert_eq!(extract_error_message(r#"{"detail": "nope"}"#), None);
    }

    #[test]
    fn test_extract_error_message_blank() {
        assert_eq!(extract_error_message(r#"{"error": {"message": "  "}}"#), None);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = LlmClient::new(None).with_base_url("http://localhost:9999/");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
