//! Link entity representing a short code to destination URL mapping.

use chrono::{DateTime, Utc};

/// Codes that collide with fixed routes at the root path.
///
/// `GET /health` is matched before `GET /{code}`, and `/api` prefixes the
/// JSON API.
pub const RESERVED_CODES: &[&str] = &["health", "api"];

/// Returns `true` if `code` would be shadowed by a fixed route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// A persisted short link.
///
/// Immutable once created; the code is unique across the registry.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}

impl NewLink {
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
        }
    }
}
