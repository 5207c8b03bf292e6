//! Slug derivation for menu and page identifiers

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("static slug pattern is valid"));

/// Derive a URL slug from a human title.
///
/// The title is lowercased, every run of characters that are neither letters
/// nor digits collapses to one `-`, and dashes at either end are dropped.
/// Letters outside ASCII are kept as they are, so `"Réglages"` stays
/// `"réglages"`. A title with no letters or digits yields an empty slug.
///
/// ```rust
/// use plugkit_common::slugify;
///
/// assert_eq!(slugify("My Admin Page!"), "my-admin-page");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
