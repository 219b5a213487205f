//! Match record model — one scraped replay with both sides' rosters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize::canonical_name;

/// One side of a match as recorded in the dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamEntry {
    /// Display name of the participant controlling this side.
    /// Falls back to the side id when absent.
    pub name: Option<String>,

    /// Raw roster strings as scraped (e.g. "Froslass, F").
    /// The dataset serializes this field as `team`.
    #[serde(rename = "team", default)]
    pub roster: Vec<String>,
}

/// A single completed game from the replay dataset.
///
/// Records are immutable once loaded. Missing fields degrade to safe
/// defaults rather than failing deserialization: a record without `teams`
/// simply has zero sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Tournament label, may be absent or empty.
    #[serde(default)]
    pub tournament: Option<String>,

    /// Forum thread the replay was collected from.
    #[serde(default)]
    pub thread_url: Option<String>,

    /// Replay URI. Opaque, never interpreted.
    pub link: String,

    /// Display name of the winning side; absent means outcome unknown.
    #[serde(default)]
    pub winner: Option<String>,

    /// Side id ("p1", "p2") to team entry. A BTreeMap keeps side
    /// iteration order deterministic regardless of JSON key order.
    #[serde(default)]
    pub teams: BTreeMap<String, TeamEntry>,
}

impl TeamEntry {
    /// Display name for this side, falling back to the side id.
    pub fn display_name<'a>(&'a self, side_id: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => side_id,
        }
    }

    /// Canonical roster names: stripped at the first comma, trimmed,
    /// empties dropped. Order preserved, duplicates kept.
    pub fn canonical_roster(&self) -> Vec<String> {
        self.roster
            .iter()
            .map(|raw| canonical_name(raw))
            .filter(|name| !name.is_empty())
            .collect()
    }
}

impl MatchRecord {
    /// Tournament label with the "Unknown" fallback.
    pub fn tournament_label(&self) -> &str {
        match self.tournament.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => "Unknown",
        }
    }

    /// Winner display name, treating an empty string as absent.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_json() -> &'static str {
        r#"{
            "tournament": "ZU OPEN",
            "thread_url": "https://www.smogon.com/forums/threads/zu-open-round-1.3776292/",
            "link": "https://replay.pokemonshowdown.com/gen9zu-123456",
            "winner": "Ann",
            "teams": {
                "p1": { "name": "Ann", "team": ["Froslass, F", "Snorlax"] },
                "p2": { "name": "Bo", "team": ["Pikachu, M"] }
            }
        }"#
    }

    #[test]
    fn test_deserialize_full_record() {
        let record: MatchRecord = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(record.tournament_label(), "ZU OPEN");
        assert_eq!(record.winner_name(), Some("Ann"));
        assert_eq!(record.teams.len(), 2);
        assert_eq!(record.teams["p1"].roster, vec!["Froslass, F", "Snorlax"]);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let record: MatchRecord =
            serde_json::from_str(r#"{"link": "https://example.com/replay"}"#).unwrap();

        assert_eq!(record.tournament_label(), "Unknown");
        assert_eq!(record.winner_name(), None);
        assert!(record.teams.is_empty());
    }

    #[test]
    fn test_empty_winner_is_absent() {
        let record: MatchRecord =
            serde_json::from_str(r#"{"link": "x", "winner": "  "}"#).unwrap();
        assert_eq!(record.winner_name(), None);
    }

    #[test]
    fn test_display_name_falls_back_to_side_id() {
        let named = TeamEntry {
            name: Some("Ann".to_string()),
            roster: vec![],
        };
        let unnamed = TeamEntry::default();
        let blank = TeamEntry {
            name: Some("   ".to_string()),
            roster: vec![],
        };

        assert_eq!(named.display_name("p1"), "Ann");
        assert_eq!(unnamed.display_name("p1"), "p1");
        assert_eq!(blank.display_name("p2"), "p2");
    }

    #[test]
    fn test_canonical_roster_strips_and_drops_empties() {
        let entry = TeamEntry {
            name: None,
            roster: vec![
                "Froslass, F".to_string(),
                "  ".to_string(),
                "Snorlax".to_string(),
                ", M".to_string(),
            ],
        };

        assert_eq!(entry.canonical_roster(), vec!["Froslass", "Snorlax"]);
    }

    #[test]
    fn test_serialization_round_trip() {
        let record: MatchRecord = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: MatchRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record.link, back.link);
        assert_eq!(record.teams["p2"].roster, back.teams["p2"].roster);
        // Roster keeps its scraped field name on the wire.
        assert!(json.contains("\"team\""));
    }
}
