//! Handlers for the link registry endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every short link, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Registers a new short code.
///
/// # Endpoint
///
/// `POST /api/v1/links`
///
/// # Request Body
///
/// ```json
/// { "code": "abc", "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "shortLinkId": 1 }`.
///
/// # Errors
///
/// - 400 `Validation error` if the code is shorter than 3 characters or the URL is invalid
/// - 400 `Duplicated code` if the code is taken
/// - 500 on database errors
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.code, payload.url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short_link_id: link.id,
        }),
    ))
}
