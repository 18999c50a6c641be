//! Redis-backed click counter store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{info, warn};

use crate::domain::entities::{ClickScore, rank_top_n};
use crate::domain::repositories::ClickCounterStore;
use crate::error::AppError;

/// Click counters stored in a single Redis sorted set.
///
/// Each member is a link id and its score is the click count. `ZINCRBY` is
/// atomic on the server, so no update is lost however many replicas of the
/// service increment the same member.
///
/// Uses `ConnectionManager`, which reconnects transparently and is cheap to
/// clone per call.
pub struct RedisCounterStore {
    client: ConnectionManager,
    key: String,
}

impl RedisCounterStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key` - Sorted set holding the scores (`METRICS_KEY`, default `metrics`)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        let key = key.into();
        info!(key = %key, "Connected to Redis click counter store");

        Ok(Self {
            client: manager,
            key,
        })
    }
}

#[async_trait]
impl ClickCounterStore for RedisCounterStore {
    async fn increment(&self, link_id: i64) -> Result<(), AppError> {
        let mut conn = self.client.clone();
        conn.zincr::<_, _, _, f64>(&self.key, link_id, 1).await?;
        Ok(())
    }

    async fn top_n(&self, n: usize) -> Result<Vec<ClickScore>, AppError> {
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut conn = self.client.clone();
        let stop = isize::try_from(n).unwrap_or(isize::MAX) - 1;
        let head: Vec<(String, f64)> = conn.zrevrange_withscores(&self.key, 0, stop).await?;

        // ZREVRANGE breaks ties by member, not by id; pull the whole tie
        // group at the cutoff so ranking picks the lowest ids.
        let raw = match cutoff_score(&head, n) {
            Some(min) => {
                conn.zrevrangebyscore_withscores(&self.key, "+inf", min)
                    .await?
            }
            None => head,
        };

        Ok(rank_top_n(parse_scores(raw), n))
    }

    async fn score(&self, link_id: i64) -> Result<u64, AppError> {
        let mut conn = self.client.clone();
        let score: Option<f64> = conn.zscore(&self.key, link_id).await?;
        Ok(score.map(score_to_clicks).unwrap_or(0))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

/// Converts raw `(member, score)` pairs into click scores.
///
/// Members that are not integer ids were not written by this service and are
/// skipped.
fn parse_scores(raw: Vec<(String, f64)>) -> Vec<ClickScore> {
    raw.into_iter()
        .filter_map(|(member, score)| match member.parse::<i64>() {
            Ok(link_id) => Some(ClickScore::new(link_id, score_to_clicks(score))),
            Err(_) => {
                warn!(member = %member, "Skipping non-numeric member in click counter set");
                None
            }
        })
        .collect()
}

/// Lowest score of a full `ZREVRANGE` page.
///
/// A short page already holds every member, so no refetch is needed.
fn cutoff_score(head: &[(String, f64)], n: usize) -> Option<f64> {
    if head.len() < n {
        return None;
    }
    head.last().map(|(_, score)| *score)
}

/// Sorted-set scores are doubles; clicks are whole and never negative.
fn score_to_clicks(score: f64) -> u64 {
    if score.is_finite() && score > 0.0 {
        score as u64
    } else {
        0
    }
}
