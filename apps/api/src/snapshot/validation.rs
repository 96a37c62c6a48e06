//! Request-shape validation for the snapshot endpoint.
//!
//! Validation runs to completion before the first provider call, so a bad
//! section never costs an upstream request. Error messages name the offending
//! key; the portal surfaces them verbatim.

use serde_json::Value;

use crate::errors::AppError;

/// Extracts and validates the `sections` mapping from a request body.
///
/// Returns the sections as `(key, prompt)` pairs in the order they appeared
/// in the request object. Rules:
/// - the body must be a JSON object with a `sections` object field
/// - every section value must be a string that is non-empty after trimming
pub fn parse_sections(body: &Value) -> Result<Vec<(String, String)>, AppError> {
    let object = body
        .as_object()
        .ok_or_else(|| AppError::Validation("request body must be a JSON object".to_string()))?;

    let sections = object
        .get("sections")
        .ok_or_else(|| AppError::Validation("missing 'sections' field".to_string()))?
        .as_object()
        .ok_or_else(|| {
            AppError::Validation("'sections' must be an object of string prompts".to_string())
        })?;

    let mut parsed = Vec::with_capacity(sections.len());

    for (key, value) in sections {
        let prompt = value.as_str().ok_or_else(|| {
            AppError::Validation(format!("section '{key}' must be a string prompt"))
        })?;

        if prompt.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "section '{key}' must be a non-empty string"
            )));
        }

        parsed.push((key.clone(), prompt.to_string()));
    }

    Ok(parsed)
}
