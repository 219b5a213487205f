//! Showdown sprite lookup helpers.
//!
//! Best-effort mapping from a canonical roster name to candidate sprite
//! URLs, tried in order with fallback on failure. Purely cosmetic: nothing
//! in filtering or statistics depends on this module.

use std::sync::OnceLock;

use regex::Regex;

/// Sprite key for a display name, per the Showdown naming convention:
/// lowercase, apostrophes and periods removed, remaining punctuation
/// stripped, spaces and hyphens collapsed away.
///
/// "Brute Bonnet" -> "brutebonnet", "Basculin-Blue-Striped" ->
/// "basculinbluestriped", "Sneasel-Hisui" -> "sneaselhisui".
pub fn showdown_key(name: &str) -> String {
    static APOSTROPHES: OnceLock<Regex> = OnceLock::new();
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();

    let apostrophes =
        APOSTROPHES.get_or_init(|| Regex::new(r"['\u{2019}.]").expect("valid regex"));
    let disallowed =
        DISALLOWED.get_or_init(|| Regex::new(r"[^a-z0-9\- ]").expect("valid regex"));
    let separators = SEPARATORS.get_or_init(|| Regex::new(r"[\s\-]+").expect("valid regex"));

    let key = name.to_lowercase();
    let key = apostrophes.replace_all(&key, "");
    let key = disallowed.replace_all(&key, "");
    separators.replace_all(&key, "").into_owned()
}

/// Candidate sprite URLs, most-preferred first. Static sprites only; the
/// gen5 icons are small and reliably present, the dex sprites are the
/// larger fallback.
pub fn sprite_urls(name: &str) -> Vec<String> {
    let key = showdown_key(name);
    vec![
        format!("https://play.pokemonshowdown.com/sprites/gen5/{}.png", key),
        format!("https://play.pokemonshowdown.com/sprites/dex/{}.png", key),
    ]
}
