pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::snapshot::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Non-POST methods on this route get a 405 from axum's method routing.
        .route("/api/v1/snapshot", post(handlers::handle_snapshot))
        .with_state(state)
}
