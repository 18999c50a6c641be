//! Ranked click counter abstraction.

use crate::domain::entities::ClickScore;
use crate::error::AppError;
use async_trait::async_trait;

/// Atomically-updatable ranked mapping from link id to click count.
///
/// # Contract
///
/// - [`increment`](Self::increment) never loses an update, no matter how many
///   callers hit the same id concurrently.
/// - [`top_n`](Self::top_n) returns scores that were valid at some point
///   during the call, highest first, ties ordered by ascending link id
///   (see [`crate::domain::entities::rank_top_n`]).
/// - Scores only grow; there is no decrement or reset.
///
/// # Implementations
///
/// - [`crate::infrastructure::counter::RedisCounterStore`] - Redis sorted set
/// - [`crate::infrastructure::counter::MemoryCounterStore`] - In-process map
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickCounterStore: Send + Sync {
    /// Adds one click to `link_id`, creating the entry on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend failure.
    async fn increment(&self, link_id: i64) -> Result<(), AppError>;

    /// Returns up to `n` entries in leaderboard order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend failure.
    async fn top_n(&self, n: usize) -> Result<Vec<ClickScore>, AppError>;

    /// Returns the current score for a single link (0 if never clicked).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend failure.
    async fn score(&self, link_id: i64) -> Result<u64, AppError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
