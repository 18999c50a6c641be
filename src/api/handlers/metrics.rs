//! Handler for the click leaderboard.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::metrics::{MetricsItem, MetricsQuery};
use crate::config::MAX_LEADERBOARD_LIMIT;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most clicked links.
///
/// # Endpoint
///
/// `GET /api/v1/metrics`
///
/// # Query Parameters
///
/// - `limit` (optional): Number of entries (default: `LEADERBOARD_LIMIT`, max: 1000)
///
/// # Response
///
/// ```json
/// [
///   { "shortLinkId": 3, "clicks": 42 },
///   { "shortLinkId": 1, "clicks": 17 }
/// ]
/// ```
///
/// Ordered by clicks, highest first. Clicks are counted asynchronously, so a
/// redirect that just happened may not be visible yet.
///
/// # Errors
///
/// - 400 if `limit` is out of range
/// - 500 if the counter store is unavailable
pub async fn metrics_handler(
    State(state): State<AppState>,
    Query(params): Query<MetricsQuery>,
) -> Result<Json<Vec<MetricsItem>>, AppError> {
    let limit = params.limit.unwrap_or(state.leaderboard_limit);

    if limit == 0 || limit > MAX_LEADERBOARD_LIMIT {
        return Err(AppError::validation(json!({
            "limit": format!("must be between 1 and {MAX_LEADERBOARD_LIMIT}")
        })));
    }

    let entries = state.leaderboard_service.report(limit).await?;

    Ok(Json(entries.into_iter().map(MetricsItem::from).collect()))
}
