//! Click score entity and leaderboard ordering.

use std::cmp::Ordering;

/// Number of clicks recorded for a link.
///
/// Entries exist only for links that have been clicked at least once.
/// Scores never decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickScore {
    pub link_id: i64,
    pub score: u64,
}

impl ClickScore {
    pub fn new(link_id: i64, score: u64) -> Self {
        Self { link_id, score }
    }

    /// Leaderboard order: highest score first, ties by ascending link id.
    pub fn leaderboard_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.link_id.cmp(&other.link_id))
    }
}

/// Sorts scores into leaderboard order and keeps at most `n` entries.
///
/// Both counter store backends rank through this.
pub fn rank_top_n(mut scores: Vec<ClickScore>, n: usize) -> Vec<ClickScore> {
    scores.sort_by(ClickScore::leaderboard_cmp);
    scores.truncate(n);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_by_score_descending() {
        let ranked = rank_top_n(
            vec![
                ClickScore::new(1, 3),
                ClickScore::new(2, 10),
                ClickScore::new(3, 7),
            ],
            10,
        );

        let ids: Vec<i64> = ranked.iter().map(|s| s.link_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_breaks_ties_by_link_id() {
        let ranked = rank_top_n(
            vec![
                ClickScore::new(9, 5),
                ClickScore::new(4, 5),
                ClickScore::new(7, 5),
                ClickScore::new(1, 6),
            ],
            10,
        );

        let ids: Vec<i64> = ranked.iter().map(|s| s.link_id).collect();
        assert_eq!(ids, vec![1, 4, 7, 9]);
    }

    #[test]
    fn test_rank_truncates() {
        let ranked = rank_top_n(
            vec![
                ClickScore::new(1, 1),
                ClickScore::new(2, 2),
                ClickScore::new(3, 3),
            ],
            2,
        );

        assert_eq!(ranked, vec![ClickScore::new(3, 3), ClickScore::new(2, 2)]);
    }

    #[test]
    fn test_rank_zero_is_empty() {
        assert!(rank_top_n(vec![ClickScore::new(1, 1)], 0).is_empty());
    }
}
