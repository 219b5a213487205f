//! Match filtering.
//!
//! Filter criteria are explicit values passed in per call, never ambient
//! state; applying a filter leaves the loaded dataset untouched.

use serde::{Deserialize, Serialize};

use crate::models::MatchRecord;
use crate::normalize::fold;

/// Criteria for selecting a subset of match records.
///
/// Tournament matches the raw label exactly; player and roster-member are
/// case-insensitive substring matches. Empty/absent criteria match
/// everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchFilter {
    /// Exact tournament label
    pub tournament: Option<String>,

    /// Substring of a participant display name
    pub player: Option<String>,

    /// Substring of a canonical roster-member name
    pub roster_member: Option<String>,
}

impl MatchFilter {
    /// True if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.active_player_query().is_none()
            && self.tournament.as_deref().map_or(true, |t| t.is_empty())
            && self
                .roster_member
                .as_deref()
                .map_or(true, |m| m.trim().is_empty())
    }

    /// The folded player query, if one is active.
    pub fn active_player_query(&self) -> Option<String> {
        self.player
            .as_deref()
            .map(fold)
            .filter(|p| !p.is_empty())
    }

    /// Test a single record against all active criteria.
    pub fn matches(&self, record: &MatchRecord) -> bool {
        if let Some(tournament) = self.tournament.as_deref().filter(|t| !t.is_empty()) {
            if record.tournament.as_deref().unwrap_or("") != tournament {
                return false;
            }
        }

        if let Some(player) = self.active_player_query() {
            let found = record
                .teams
                .iter()
                .any(|(side_id, entry)| fold(entry.display_name(side_id)).contains(&player));
            if !found {
                return false;
            }
        }

        if let Some(member) = self
            .roster_member
            .as_deref()
            .map(fold)
            .filter(|m| !m.is_empty())
        {
            let found = record.teams.values().any(|entry| {
                entry
                    .canonical_roster()
                    .iter()
                    .any(|name| fold(name).contains(&member))
            });
            if !found {
                return false;
            }
        }

        true
    }

    /// Select the matching subset of a dataset.
    pub fn apply(&self, records: &[MatchRecord]) -> Vec<MatchRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// Distinct non-empty tournament labels, sorted.
pub fn tournament_labels(records: &[MatchRecord]) -> Vec<String> {
    let mut labels: Vec<String> = records
        .iter()
        .filter_map(|r| r.tournament.clone())
        .filter(|t| !t.is_empty())
        .collect();
    labels.sort();
    labels.dedup();
    labels
}
