//! PostgreSQL repository implementations.
//!
//! - [`PgLinkRepository`] - Link registry storage and retrieval

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
