//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link registry
//! - [`ClickCounterStore`] - Ranked click counters
//!
//! # Testing
//!
//! See integration tests in `tests/repository_link.rs` and the in-memory store tests.

pub mod click_counter_store;
pub mod link_repository;

pub use click_counter_store::ClickCounterStore;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_counter_store::MockClickCounterStore;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
