//! In-process click counter store.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::entities::{ClickScore, rank_top_n};
use crate::domain::repositories::ClickCounterStore;
use crate::error::AppError;

/// Click counters kept in a sharded concurrent map.
///
/// `increment` takes the shard write lock for the key, so `+= 1` is a single
/// critical section and concurrent increments cannot be lost. `top_n` walks
/// the shards one at a time and sorts the copy, which is enough for a
/// leaderboard: each score it returns was current at some point during the
/// call.
///
/// Counters live as long as the process. Used when Redis is not configured
/// or unreachable at startup.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    scores: DashMap<i64, u64>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        debug!("Using in-memory click counter store");
        Self {
            scores: DashMap::new(),
        }
    }
}

#[async_trait]
impl ClickCounterStore for MemoryCounterStore {
    async fn increment(&self, link_id: i64) -> Result<(), AppError> {
        *self.scores.entry(link_id).or_insert(0) += 1;
        Ok(())
    }

    async fn top_n(&self, n: usize) -> Result<Vec<ClickScore>, AppError> {
        if n == 0 {
            return Ok(Vec::new());
        }

        let snapshot = self
            .scores
            .iter()
            .map(|entry| ClickScore::new(*entry.key(), *entry.value()))
            .collect();

        Ok(rank_top_n(snapshot, n))
    }

    async fn score(&self, link_id: i64) -> Result<u64, AppError> {
        Ok(self.scores.get(&link_id).map(|s| *s).unwrap_or(0))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
