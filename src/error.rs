//! Application error type and its HTTP mapping.
//!
//! Core services return [`AppError`] and never deal with HTTP directly; the
//! status/body table lives in the [`IntoResponse`] impl below.
//!
//! | Variant | Status | Body message |
//! |---------|--------|--------------|
//! | [`AppError::NotFound`] | 404 | `Not found` |
//! | [`AppError::DuplicateCode`] | 400 | `Duplicated code` |
//! | [`AppError::Validation`] | 400 | `Validation error` |
//! | [`AppError::Lookup`] | 500 | `Internal server error` |
//! | [`AppError::StoreUnavailable`] | 500 | `Internal server error` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The short code has no mapping in the link registry.
    #[error("short link not found")]
    NotFound,

    /// The short code is already taken.
    #[error("short code '{code}' already exists")]
    DuplicateCode { code: String },

    /// Request input rejected at the boundary.
    #[error("validation failed: {details}")]
    Validation { details: Value },

    /// The link registry could not be queried.
    #[error("link registry error: {0}")]
    Lookup(String),

    /// The click counter backend failed.
    #[error("click counter store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AppError {
    pub fn validation(details: Value) -> Self {
        Self::Validation { details }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateCode { .. } | AppError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Lookup(_) | AppError::StoreUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn to_body(&self) -> ErrorBody {
        match self {
            AppError::NotFound => ErrorBody {
                message: "Not found",
                details: None,
            },
            AppError::DuplicateCode { .. } => ErrorBody {
                message: "Duplicated code",
                details: None,
            },
            AppError::Validation { details } => ErrorBody {
                message: "Validation error",
                details: Some(details.clone()),
            },
            AppError::Lookup(_) | AppError::StoreUnavailable(_) => ErrorBody {
                message: "Internal server error",
                details: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(self.to_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Lookup(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or(Value::Null);
        AppError::validation(details)
    }
}
