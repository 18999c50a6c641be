//! DTOs for the click leaderboard endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::LeaderboardEntry;

/// Query parameters for `GET /api/v1/metrics`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct MetricsQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One leaderboard row: `{ "shortLinkId": 1, "clicks": 3 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsItem {
    pub short_link_id: i64,
    pub clicks: u64,
}

impl From<LeaderboardEntry> for MetricsItem {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            short_link_id: entry.short_link_id,
            clicks: entry.clicks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metrics_item_shape() {
        let item = MetricsItem::from(LeaderboardEntry {
            short_link_id: 4,
            clicks: 12,
        });

        assert_eq!(
            serde_json::to_value(item).unwrap(),
            json!({ "shortLinkId": 4, "clicks": 12 })
        );
    }
}
