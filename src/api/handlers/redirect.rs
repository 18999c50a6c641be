//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::links::CodeParams;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Validate the code (at least 3 characters)
/// 2. Resolve it through the link registry
/// 3. Queue a click for the background worker (fire-and-forget)
/// 4. Return 301 Moved Permanently
///
/// # Errors
///
/// - 400 if the code is too short
/// - 404 if the code doesn't exist
/// - 500 if the registry is unavailable
pub async fn redirect_handler(
    Path(params): Path<CodeParams>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    params.validate()?;

    let target = state.resolver.resolve(&params.code).await?;
    Ok((target.status, [(header::LOCATION, target.location)]).into_response())
}
