//! DTOs for link registry endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Link, is_reserved_code};

/// Path parameters for `GET /{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct CodeParams {
    #[validate(length(min = 3, message = "Code must be at least 3 characters"))]
    pub code: String,
}

/// Request body for `POST /api/v1/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(
        length(min = 3, message = "Code must be at least 3 characters"),
        custom(function = "validate_not_reserved")
    )]
    pub code: String,

    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

fn validate_not_reserved(code: &str) -> Result<(), ValidationError> {
    if is_reserved_code(code) {
        return Err(ValidationError::new("reserved")
            .with_message(Cow::Borrowed("Code is reserved for a built-in route")));
    }
    Ok(())
}

/// Response body for a created link.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub short_link_id: i64,
}

/// A stored link as returned by `GET /api/v1/links`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            original_url: link.original_url,
            created_at: link.created_at,
        }
    }
}
