//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click counting event model
//! - [`click_worker`] - Asynchronous click counting worker
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by the
//! infrastructure layer.
//!
//! # Click Processing Flow
//!
//! 1. [`crate::application::services::Resolver`] resolves a code
//! 2. A [`click_event::ClickEvent`] is pushed to a bounded channel (non-blocking)
//! 3. [`click_worker::run_click_worker`] applies it to the counter store
//! 4. [`crate::application::services::LeaderboardService`] reads the ranking

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
