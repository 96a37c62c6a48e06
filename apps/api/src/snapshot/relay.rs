//! Snapshot generation — one completion per section, strictly in order.
//!
//! Sections are processed sequentially: section N+1 is not started until
//! section N has resolved. The first failure aborts the batch and discards
//! any completions already produced; callers never see partial results.

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::{CompletionConfig, LlmClient};

/// Generates completion text for every section, in input order.
///
/// Fail-fast and at-most-one-attempt per section: a provider failure on any
/// key returns the error and drops the completions gathered so far.
pub async fn generate_snapshot(
    llm: &LlmClient,
    config: &CompletionConfig,
    sections: &[(String, String)],
) -> Result<Map<String, Value>, AppError> {
    info!("Generating snapshot: {} section(s)", sections.len());

    let mut report = Map::new();

    for (key, prompt) in sections {
        debug!("Requesting completion for section '{key}'");
        let text = llm.complete(config, prompt).await?;
        report.insert(key.clone(), Value::String(text));
    }

    Ok(report)
}
