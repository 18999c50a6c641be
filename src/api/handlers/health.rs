//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: `SELECT 1` against the link registry
/// 2. **Counter store**: Redis PING (always ok for the in-memory store)
/// 3. **Click queue**: Channel open, remaining capacity
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (database, counter_store) =
        tokio::join!(check_database(&state), check_counter_store(&state));
    let click_queue = check_click_queue(&state);

    let all_healthy = database.is_ok() && counter_store.is_ok() && click_queue.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            counter_store,
            click_queue,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    if state.link_service.health_check().await {
        CheckStatus::ok("Connected")
    } else {
        CheckStatus::error("Database connection failed")
    }
}

async fn check_counter_store(state: &AppState) -> CheckStatus {
    if state.counter_store.health_check().await {
        CheckStatus::ok("Reachable")
    } else {
        CheckStatus::error("Counter store unreachable")
    }
}

fn check_click_queue(state: &AppState) -> CheckStatus {
    if state.click_sender.is_closed() {
        CheckStatus::error("Click queue is closed")
    } else {
        CheckStatus::ok(format!("Capacity: {}", state.click_sender.capacity()))
    }
}
