//! Terminal rendering of match cards and the usage table.
//!
//! Consumes what the calculate and filter modules produce; never feeds
//! anything back into them. Rendering problems (a missing sprite, an odd
//! name) must never affect computed statistics.

use std::io::{self, Write};

use crate::models::{MatchRecord, TeamEntry, UsageStats};
use crate::normalize::fold;
use crate::sprite::sprite_urls;

/// Default number of stat rows shown.
pub const DEFAULT_STATS_LIMIT: usize = 50;

/// Render one card per match: replay link, tournament, winner when known,
/// source thread when present, and each side's canonical roster.
///
/// When `player_query` is active only the matching side(s) are shown,
/// falling back to all sides if none match. With `show_sprites` each
/// roster member also gets its preferred sprite URL.
pub fn render_cards<W: Write>(
    out: &mut W,
    records: &[MatchRecord],
    player_query: Option<&str>,
    show_sprites: bool,
) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "No matches found.")?;
        return Ok(());
    }

    writeln!(out, "Showing {} replays", records.len())?;

    let query = player_query.map(fold).filter(|q| !q.is_empty());

    for record in records {
        writeln!(out)?;
        writeln!(out, "{}", record.link)?;

        match record.winner_name() {
            Some(winner) => writeln!(
                out,
                "  Tournament: {} · Winner: {}",
                record.tournament_label(),
                winner
            )?,
            None => writeln!(out, "  Tournament: {}", record.tournament_label())?,
        }

        if let Some(thread) = record.thread_url.as_deref().filter(|t| !t.is_empty()) {
            writeln!(out, "  Thread: {}", thread)?;
        }

        let mut sides: Vec<(&String, &TeamEntry)> = record.teams.iter().collect();
        if let Some(ref q) = query {
            let matching: Vec<_> = sides
                .iter()
                .filter(|(side_id, entry)| fold(entry.display_name(side_id)).contains(q))
                .cloned()
                .collect();
            if !matching.is_empty() {
                sides = matching;
            }
        }

        for (side_id, entry) in sides {
            let roster = entry.canonical_roster();
            writeln!(
                out,
                "  {}: {}",
                entry.display_name(side_id),
                if roster.is_empty() {
                    "(no roster)".to_string()
                } else {
                    roster.join(", ")
                }
            )?;

            if show_sprites {
                for name in &roster {
                    let urls = sprite_urls(name);
                    writeln!(out, "    {} {}", name, urls[0])?;
                }
            }
        }
    }

    Ok(())
}

/// Render the usage/winrate table, top `limit` rows.
///
/// Undefined winrates render as "—", never as 0%.
pub fn render_stats_table<W: Write>(
    out: &mut W,
    stats: &UsageStats,
    limit: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "Games: {} · Team-slot uses: {}{}",
        stats.total_games,
        stats.total_uses,
        if stats.has_decided_outcomes() || stats.rows.is_empty() {
            ""
        } else {
            " · Winrate unavailable (no winners recorded)"
        }
    )?;
    writeln!(
        out,
        "Usage% (Uses) = uses / total team slots · Usage% (Games) = games present / total games"
    )?;
    writeln!(out)?;

    let rows = &stats.rows[..stats.rows.len().min(limit)];

    let name_width = rows
        .iter()
        .map(|r| r.name.len())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(4);

    writeln!(
        out,
        "{:<name_width$}  {:>5}  {:>12}  {:>5}  {:>13}  {:>5}  {:>6}  {:>7}",
        "Name", "Uses", "Usage%(Uses)", "Games", "Usage%(Games)", "Wins", "Losses", "Winrate",
    )?;

    for row in rows {
        let winrate = match row.winrate {
            Some(w) => format!("{:.1}%", w),
            None => "—".to_string(),
        };
        writeln!(
            out,
            "{:<name_width$}  {:>5}  {:>11.2}%  {:>5}  {:>12.2}%  {:>5}  {:>6}  {:>7}",
            row.name,
            row.uses,
            row.usage_by_uses_pct,
            row.games_present,
            row.usage_by_games_pct,
            row.wins,
            row.losses,
            winrate,
        )?;
    }

    Ok(())
}

/// Render the distinct tournament labels, one per line.
pub fn render_tournaments<W: Write>(out: &mut W, labels: &[String]) -> io::Result<()> {
    if labels.is_empty() {
        writeln!(out, "No tournament data in dataset.")?;
        return Ok(());
    }
    for label in labels {
        writeln!(out, "{}", label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::compute_usage_stats;
    use crate::models::TeamEntry;

    fn sample_records() -> Vec<MatchRecord> {
        let p1 = TeamEntry {
            name: Some("Ann".to_string()),
            roster: vec!["Froslass, F".to_string(), "Snorlax".to_string()],
        };
        let p2 = TeamEntry {
            name: Some("Bo".to_string()),
            roster: vec!["Pikachu, M".to_string()],
        };
        vec![MatchRecord {
            tournament: Some("ZU OPEN".to_string()),
            thread_url: Some("https://forums.example/thread".to_string()),
            link: "https://replay.example/1".to_string(),
            winner: Some("Ann".to_string()),
            teams: [("p1".to_string(), p1), ("p2".to_string(), p2)]
                .into_iter()
                .collect(),
        }]
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_cards_shows_both_sides() {
        let out = rendered(|buf| render_cards(buf, &sample_records(), None, false));

        assert!(out.contains("Showing 1 replays"));
        assert!(out.contains("Tournament: ZU OPEN · Winner: Ann"));
        assert!(out.contains("Ann: Froslass, Snorlax"));
        assert!(out.contains("Bo: Pikachu"));
        assert!(out.contains("Thread: https://forums.example/thread"));
    }

    #[test]
    fn test_render_cards_player_filter_narrows_sides() {
        let out = rendered(|buf| render_cards(buf, &sample_records(), Some("bo"), false));

        assert!(out.contains("Bo: Pikachu"));
        assert!(!out.contains("Ann: Froslass"));
    }

    #[test]
    fn test_render_cards_unmatched_player_falls_back_to_all_sides() {
        let out = rendered(|buf| render_cards(buf, &sample_records(), Some("zzz"), false));

        assert!(out.contains("Ann: Froslass, Snorlax"));
        assert!(out.contains("Bo: Pikachu"));
    }

    #[test]
    fn test_render_cards_sprites() {
        let out = rendered(|buf| render_cards(buf, &sample_records(), None, true));

        assert!(out.contains("https://play.pokemonshowdown.com/sprites/gen5/froslass.png"));
    }

    #[test]
    fn test_render_cards_empty() {
        let out = rendered(|buf| render_cards(buf, &[], None, false));
        assert_eq!(out, "No matches found.\n");
    }

    #[test]
    fn test_render_stats_table() {
        let stats = compute_usage_stats(&sample_records());
        let out = rendered(|buf| render_stats_table(buf, &stats, DEFAULT_STATS_LIMIT));

        assert!(out.contains("Games: 1 · Team-slot uses: 3"));
        assert!(out.contains("Froslass"));
        assert!(out.contains("100.0%")); // Ann's mons won
        assert!(!out.contains("Winrate unavailable"));
    }

    #[test]
    fn test_render_stats_table_undefined_winrate() {
        let mut records = sample_records();
        records[0].winner = None;

        let stats = compute_usage_stats(&records);
        let out = rendered(|buf| render_stats_table(buf, &stats, DEFAULT_STATS_LIMIT));

        assert!(out.contains("—"));
        assert!(out.contains("Winrate unavailable"));
    }

    #[test]
    fn test_render_stats_table_respects_limit() {
        let stats = compute_usage_stats(&sample_records());
        let out = rendered(|buf| render_stats_table(buf, &stats, 1));

        assert!(out.contains("Froslass"));
        assert!(!out.contains("Pikachu"));
    }

    #[test]
    fn test_render_tournaments() {
        let out = rendered(|buf| {
            render_tournaments(buf, &["ZU OPEN".to_string(), "ZUCL".to_string()])
        });
        assert_eq!(out, "ZU OPEN\nZUCL\n");

        let empty = rendered(|buf| render_tournaments(buf, &[]));
        assert!(empty.contains("No tournament data"));
    }
}
