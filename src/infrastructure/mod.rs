//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`counter`] - Click counter stores (Redis and in-memory)
//! - [`persistence`] - PostgreSQL link registry

pub mod counter;
pub mod persistence;
