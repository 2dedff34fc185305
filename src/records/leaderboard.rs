//! Leaderboard rows

use super::{Record, Resource, ResourceKind};
use crate::display::{format_date, NOT_AVAILABLE, ZERO_AMOUNT};

pub const KEY_FIELDS: &[&str] = &["id", "user_id"];
pub const RANK_FIELDS: &[&str] = &["rank"];
pub const USER_FIELDS: &[&str] = &["user_name", "user"];
pub const TEAM_FIELDS: &[&str] = &["team"];
pub const POINTS_FIELDS: &[&str] = &["total_points"];
pub const UPDATED_FIELDS: &[&str] = &["last_updated"];

/// Ranks at or above this one are highlighted
pub const PODIUM_SIZE: u64 = 3;

/// One leaderboard row
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub key: String,
    pub rank: u64,
    pub user: String,
    pub team: String,
    pub total_points: String,
    pub last_updated: Option<String>,
}

/// Medal glyph for the podium ranks
pub fn medal(rank: u64) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

impl LeaderboardRow {
    pub fn is_top_three(&self) -> bool {
        self.rank <= PODIUM_SIZE
    }

    /// Medal for ranks 1-3, the number otherwise
    pub fn rank_badge(&self) -> String {
        medal(self.rank)
            .map(str::to_string)
            .unwrap_or_else(|| self.rank.to_string())
    }

    pub fn points(&self) -> String {
        self.total_points.clone()
    }

    pub fn updated(&self) -> String {
        format_date(self.last_updated.as_deref())
    }
}

impl Resource for LeaderboardRow {
    const KIND: ResourceKind = ResourceKind::Leaderboard;

    fn from_record(position: usize, record: &Record) -> Self {
        let rank = record
            .integer(RANK_FIELDS)
            .filter(|rank| *rank > 0)
            .map(|rank| rank as u64)
            .unwrap_or(position as u64 + 1);

        Self {
            key: record
                .text(KEY_FIELDS)
                .unwrap_or_else(|| position.to_string()),
            rank,
            user: record
                .text(USER_FIELDS)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            team: record
                .text(TEAM_FIELDS)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            total_points: record
                .amount(POINTS_FIELDS)
                .unwrap_or_else(|| ZERO_AMOUNT.to_string()),
            last_updated: record.text(UPDATED_FIELDS),
        }
    }

    fn key(&self) -> String {
        self.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(values: Vec<serde_json::Value>) -> Vec<LeaderboardRow> {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| LeaderboardRow::from_record(i, &Record::from_value(v)))
            .collect()
    }

    #[test]
    fn test_positional_ranks() {
        let rows = rows(vec![
            json!({"user_name": "a"}),
            json!({"user_name": "b"}),
            json!({"user_name": "c"}),
            json!({"user_name": "d"}),
            json!({"user_name": "e"}),
        ]);
        let ranks: Vec<u64> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);

        let badges: Vec<String> = rows.iter().map(|r| r.rank_badge()).collect();
        assert_eq!(badges, vec!["🥇", "🥈", "🥉", "4", "5"]);
        assert!(rows[2].is_top_three());
        assert!(!rows[3].is_top_three());
    }

    #[test]
    fn test_explicit_rank_wins() {
        let rows = rows(vec![json!({"rank": 7}), json!({"rank": 2})]);
        assert_eq!(rows[0].rank, 7);
        assert_eq!(rows[0].rank_badge(), "7");
        assert_eq!(rows[1].rank_badge(), "🥈");
    }

    #[test]
    fn test_zero_rank_uses_position() {
        let rows = rows(vec![json!({"rank": 0})]);
        assert_eq!(rows[0].rank, 1);
    }

    #[test]
    fn test_key_and_fallbacks() {
        let rows = rows(vec![json!({"user_id": "u-3", "user": "Batman"}), json!({})]);
        assert_eq!(rows[0].key, "u-3");
        assert_eq!(rows[0].user, "Batman");
        assert_eq!(rows[0].team, "N/A");
        assert_eq!(rows[1].key, "1");
        assert_eq!(rows[1].points(), "0");
        assert_eq!(rows[1].updated(), "N/A");
    }
}
