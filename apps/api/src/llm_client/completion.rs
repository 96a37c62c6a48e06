//! Immutable per-call generation parameters.
//!
//! Every snapshot section is generated with the same fixed settings; they are
//! carried as an explicit value (not inlined constants) so tests can substitute
//! a different model or instruction without touching the client.

/// Generation parameters for one completion call.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// System instruction sent ahead of every user prompt.
    pub system: String,
}
