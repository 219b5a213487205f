//! Statistics calculation engine.
//!
//! Computes per-roster-member usage and winrate from any set of match
//! records, typically the output of a [`MatchFilter`](crate::filter::MatchFilter).
//! Pure functions over immutable input; results are recomputed from
//! scratch on every call.

use std::collections::{HashMap, HashSet};

use crate::models::{MatchRecord, StatRow, UsageStats};
use crate::normalize::fold;

/// Team-size limit of the game; roster entries beyond this are ignored.
pub const ROSTER_CAP: usize = 6;

#[derive(Default)]
struct Tally {
    uses: u64,
    wins: u64,
    losses: u64,
    games_present: u64,
}

/// Compute usage and winrate statistics over a set of matches.
///
/// Single pass over the input, then a derive-and-sort pass:
///
/// - `uses` counts one per side a member appears on, deduplicated within
///   the side and capped at [`ROSTER_CAP`] slots.
/// - `wins`/`losses` are counted per use, only when the match has a
///   winner; in a mirror match the shared member collects one of each.
/// - `games_present` counts one per match the member appears in, however
///   many sides or slots that is.
/// - `winrate` is `None` for members with zero uses, never `0/0`.
///
/// Rows come back sorted by uses descending, winrate descending
/// (undefined below any defined value), stable beyond that. Malformed
/// records contribute only to `total_games`.
pub fn compute_usage_stats(matches: &[MatchRecord]) -> UsageStats {
    let total_games = matches.len() as u64;
    let mut total_uses: u64 = 0;

    // Tallies keyed by canonical name, with first-encounter order kept
    // separately so the final stable sort is reproducible.
    let mut tallies: HashMap<String, Tally> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for record in matches {
        let winner = record.winner_name().map(fold);
        let mut present_this_game: Vec<String> = Vec::new();

        for (side_id, entry) in &record.teams {
            let display_name = entry.display_name(side_id);
            // None = outcome unknown for every side of this match.
            let side_won = winner.as_deref().map(|w| w == fold(display_name));

            let mut seen_on_side: HashSet<String> = HashSet::new();
            for name in entry.canonical_roster().into_iter().take(ROSTER_CAP) {
                if !seen_on_side.insert(name.clone()) {
                    continue;
                }

                total_uses += 1;
                if !tallies.contains_key(&name) {
                    order.push(name.clone());
                }
                let tally = tallies.entry(name.clone()).or_default();
                tally.uses += 1;
                match side_won {
                    Some(true) => tally.wins += 1,
                    Some(false) => tally.losses += 1,
                    None => {}
                }

                if !present_this_game.contains(&name) {
                    present_this_game.push(name);
                }
            }
        }

        // Union across sides: once per match, mirror or not.
        for name in present_this_game {
            if let Some(tally) = tallies.get_mut(&name) {
                tally.games_present += 1;
            }
        }
    }

    let mut rows: Vec<StatRow> = order
        .into_iter()
        .map(|name| {
            let tally = &tallies[&name];
            StatRow {
                usage_by_uses_pct: percentage(tally.uses, total_uses),
                usage_by_games_pct: percentage(tally.games_present, total_games),
                winrate: if tally.uses > 0 {
                    Some(percentage(tally.wins, tally.uses))
                } else {
                    None
                },
                uses: tally.uses,
                wins: tally.wins,
                losses: tally.losses,
                games_present: tally.games_present,
                name,
            }
        })
        .collect();

    // Vec::sort_by is stable, so equal-key rows keep encounter order.
    rows.sort_by(|a, b| {
        b.uses.cmp(&a.uses).then_with(|| {
            let aw = a.winrate.unwrap_or(-1.0);
            let bw = b.winrate.unwrap_or(-1.0);
            bw.total_cmp(&aw)
        })
    });

    UsageStats {
        rows,
        total_uses,
        total_games,
    }
}

/// 100 * part / whole, 0.0 when the denominator is 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
