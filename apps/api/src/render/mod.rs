#![allow(dead_code)]

//! Render-with-fallback — a supervisory boundary for fallible view rendering.
//!
//! The portal wraps page regions in a boundary that swallows rendering
//! failures and shows fallback content instead of taking down the whole
//! page. This is the server-side expression of that capability: evaluate a
//! fallible render, log the failure with its region name, and substitute a
//! configured fallback view.

use std::fmt::Display;

use tracing::error;

/// Evaluates `render`; on failure, logs the error under `region` and returns
/// the fallback view instead. The fallback closure runs only on failure.
pub fn render_with_fallback<T, E>(
    region: &str,
    render: impl FnOnce() -> Result<T, E>,
    fallback: impl FnOnce() -> T,
) -> T
where
    E: Display,
{
    match render() {
        Ok(view) => view,
        Err(err) => {
            error!(region, error = %err, "Render failed; substituting fallback view");
            fallback()
        }
    }
}
