//! String normalization for roster names and comparisons.

/// Canonical roster-member name: everything before the first comma,
/// trimmed of surrounding whitespace.
///
/// The scraper keeps gender/note suffixes ("Froslass, F"); statistics and
/// filtering only ever see the canonical form.
pub fn canonical_name(raw: &str) -> String {
    raw.split(',').next().unwrap_or("").trim().to_string()
}

/// Case-fold a string for comparisons: trim, then lowercase.
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}
