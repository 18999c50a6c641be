//! Click leaderboard reporting.

use std::sync::Arc;

use crate::domain::repositories::ClickCounterStore;
use crate::error::AppError;

/// Default number of entries returned by [`LeaderboardService::report`].
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

/// One row of the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub short_link_id: i64,
    pub clicks: u64,
}

/// Reads the top links from the counter store.
///
/// Read-only and idempotent; safe to call concurrently with increments.
pub struct LeaderboardService {
    counter_store: Arc<dyn ClickCounterStore>,
}

impl LeaderboardService {
    pub fn new(counter_store: Arc<dyn ClickCounterStore>) -> Self {
        Self { counter_store }
    }

    /// Returns up to `limit` links ordered by clicks, highest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the counter store fails.
    pub async fn report(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, AppError> {
        let scores = self.counter_store.top_n(limit).await?;

        Ok(scores
            .into_iter()
            .map(|s| LeaderboardEntry {
                short_link_id: s.link_id,
                clicks: s.score,
            })
            .collect())
    }
}
