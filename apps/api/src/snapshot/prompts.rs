// Prompt constants and fixed generation parameters for the snapshot relay.
// Section prompts themselves arrive from the caller; only the system
// instruction and the model settings are fixed server-side.

use crate::llm_client::CompletionConfig;

/// System instruction sent with every section prompt.
pub const SNAPSHOT_SYSTEM: &str = "You are a concise career strategist. \
    Be friendly, forward-looking, and use plain language. \
    Answer in a short paragraph or a compact list.";

/// The model used for all snapshot completions.
/// Intentionally fixed to keep section tone consistent across a report.
pub const SNAPSHOT_MODEL: &str = "gpt-4o-mini";

pub const SNAPSHOT_TEMPERATURE: f32 = 0.4;
pub const SNAPSHOT_MAX_TOKENS: u32 = 250;

/// The fixed generation parameters applied to every snapshot section.
pub fn snapshot_completion_config() -> CompletionConfig {
    CompletionConfig {
        model: SNAPSHOT_MODEL.to_string(),
        temperature: SNAPSHOT_TEMPERATURE,
        max_tokens: SNAPSHOT_MAX_TOKENS,
        system: SNAPSHOT_SYSTEM.to_string(),
    }
}
