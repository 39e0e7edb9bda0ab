pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::extraction::handlers::handle_upload;
use crate::state::AppState;

/// Transport body cap. Sits above the 5 MiB upload limit so oversized uploads
/// get the service's own 400 response instead of a bare 413.
const BODY_LIMIT_BYTES: usize = 8 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload", post(handle_upload))
        .route("/analyze", post(handle_analyze))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
