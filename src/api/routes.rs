//! Versioned API route configuration.

use crate::api::handlers::{create_link_handler, list_links_handler, metrics_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `GET  /metrics` - Click leaderboard
/// - `GET  /links`   - All links, newest first
/// - `POST /links`   - Register a short code
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
}
