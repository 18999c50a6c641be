//! Application layer services.
//!
//! Services orchestrate repository calls and hold the rules the HTTP
//! handlers and the admin CLI share.
//!
//! # Available Services
//!
//! - [`services::resolver::Resolver`] - Code lookup, redirect target, click scheduling
//! - [`services::leaderboard_service::LeaderboardService`] - Top links by clicks
//! - [`services::link_service::LinkService`] - Link creation and listing

pub mod services;
