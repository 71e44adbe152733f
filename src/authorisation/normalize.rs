//! Text normalization.
//!
//! Normalization reduces arbitrary billboard text to a canonical, comparable
//! form: lowercase ASCII alphanumeric runs joined by single spaces. All
//! matching in this crate happens between normalized strings.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of lowercase ASCII letters and digits. Everything else
/// (punctuation, whitespace, symbols, non-ASCII) separates runs and is
/// dropped.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("Invalid token pattern"));

/// Normalize raw text for matching.
///
/// Lowercases the input, extracts all maximal `[a-z0-9]` runs, and joins
/// them with single spaces in original order. The function is total: any
/// input produces a defined output, and input with no alphanumeric runs
/// (including the empty string) produces the empty string.
///
/// Normalization is idempotent: normalizing an already-normalized string
/// yields the same string.
///
/// # Examples
/// ```
/// # use adwarden::authorisation::normalize;
/// assert_eq!(normalize("I love PEPSI!!"), "i love pepsi");
/// assert_eq!(normalize("!!!***"), "");
/// ```
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let runs: Vec<&str> = TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .collect();

    runs.join(" ")
}
