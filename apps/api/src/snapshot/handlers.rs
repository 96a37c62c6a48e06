//! Axum route handlers for the Snapshot API.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::snapshot::relay::generate_snapshot;
use crate::snapshot::validation::parse_sections;
use crate::state::AppState;

/// POST /api/v1/snapshot
///
/// Body: `{ "sections": { key: prompt, ... } }`. Returns a JSON object
/// mapping each input key to its generated completion, in input order.
///
/// The body is taken as a raw `Value` so shape problems (missing or
/// non-object `sections`) come back as 400s with key-naming messages rather
/// than axum's 422 deserialization rejection.
pub async fn handle_snapshot(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    // Credential check comes first: a misconfigured deployment fails every
    // request with a configuration error before any provider call.
    if !state.llm.has_credential() {
        return Err(AppError::Configuration(
            "provider API key is not configured".to_string(),
        ));
    }

    let sections = parse_sections(&body)?;

    let report = generate_snapshot(&state.llm, &state.completion, &sections).await?;

    Ok(Json(Value::Object(report)))
}
