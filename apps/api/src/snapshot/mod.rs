//! Snapshot relay — turns a mapping of named report sections into a mapping
//! of generated completions, one provider call per section.

pub mod handlers;
pub mod prompts;
pub mod relay;
pub mod validation;
