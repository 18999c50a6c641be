//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to a destination URL
//! - [`ClickScore`] - Click count for a link, as held by the counter store
//!
//! Creation input uses a separate `NewLink` struct, following the same split
//! between persisted and new records used throughout the domain layer.

pub mod click_score;
pub mod link;

pub use click_score::{ClickScore, rank_top_n};
pub use link::{Link, NewLink, RESERVED_CODES, is_reserved_code};
