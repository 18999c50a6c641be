//! Business logic services for the application layer.

pub mod leaderboard_service;
pub mod link_service;
pub mod resolver;

pub use leaderboard_service::{DEFAULT_LEADERBOARD_LIMIT, LeaderboardEntry, LeaderboardService};
pub use link_service::LinkService;
pub use resolver::{REDIRECT_STATUS, RedirectTarget, Resolver};
