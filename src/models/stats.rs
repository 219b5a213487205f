//! Derived statistics models.

use serde::{Deserialize, Serialize};

/// Per-roster-member usage and winrate row.
///
/// One row per distinct canonical name observed in the aggregated set.
/// Recomputed from scratch on every aggregation; never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatRow {
    /// Canonical roster-member name
    pub name: String,

    /// Team-slot uses (one per side the member appears on, deduplicated
    /// within a side)
    pub uses: u64,

    /// Wins, counted per use when the match outcome is known
    pub wins: u64,

    /// Losses, counted per use when the match outcome is known
    pub losses: u64,

    /// Matches where the member appears on either side (once per match)
    pub games_present: u64,

    /// 100 * uses / total_uses, 0.0 when there are no uses at all
    pub usage_by_uses_pct: f64,

    /// 100 * games_present / total_games, 0.0 when there are no games
    pub usage_by_games_pct: f64,

    /// 100 * wins / uses; None when the member has no uses to base it on
    pub winrate: Option<f64>,
}

/// Aggregation output: sorted rows plus the denominators they were
/// derived from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageStats {
    /// Rows sorted by uses desc, then winrate desc (undefined lowest)
    pub rows: Vec<StatRow>,

    /// Total team-slot uses across all sides
    pub total_uses: u64,

    /// Total input matches, including ones with no usable teams
    pub total_games: u64,
}

impl UsageStats {
    /// Look up a row by canonical name.
    pub fn get(&self, name: &str) -> Option<&StatRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// True if any aggregated match had a known winner.
    pub fn has_decided_outcomes(&self) -> bool {
        self.rows.iter().any(|r| r.wins + r.losses > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(name: &str, uses: u64, wins: u64) -> StatRow {
        StatRow {
            name: name.to_string(),
            uses,
            wins,
            losses: uses - wins,
            games_present: uses,
            usage_by_uses_pct: 0.0,
            usage_by_games_pct: 0.0,
            winrate: None,
        }
    }

    #[test]
    fn test_get_by_name() {
        let stats = UsageStats {
            rows: vec![row("Froslass", 3, 2), row("Snorlax", 1, 0)],
            total_uses: 4,
            total_games: 3,
        };

        assert_eq!(stats.get("Snorlax").unwrap().uses, 1);
        assert!(stats.get("Pikachu").is_none());
    }

    #[test]
    fn test_has_decided_outcomes() {
        let undecided = UsageStats {
            rows: vec![StatRow {
                wins: 0,
                losses: 0,
                ..row("Froslass", 2, 0)
            }],
            total_uses: 2,
            total_games: 2,
        };
        let decided = UsageStats {
            rows: vec![row("Froslass", 2, 1)],
            total_uses: 2,
            total_games: 2,
        };

        assert!(!undecided.has_decided_outcomes());
        assert!(decided.has_decided_outcomes());
    }

    #[test]
    fn test_stats_serialization() {
        let stats = UsageStats {
            rows: vec![row("Froslass", 3, 2)],
            total_uses: 3,
            total_games: 3,
        };

        let json = serde_json::to_string(&stats).unwrap();
        let back: UsageStats = serde_json::from_str(&json).unwrap();

        assert_eq!(back.total_uses, 3);
        assert_eq!(back.rows[0].name, "Froslass");
        // Undefined winrate stays null on the wire, never a sentinel.
        assert!(json.contains("\"winrate\":null"));
    }
}
