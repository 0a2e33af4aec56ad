//! URL detection in free-form clipboard text.

use regex::Regex;
use std::sync::LazyLock;

/// http(s) URL ending at whitespace, a quote, a paren, or an angle bracket.
static EMBEDDED_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"'()]+"#).unwrap());

/// Whole-string http(s) URL with no whitespace.
static WHOLE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\Ahttps?://\S+\z").unwrap());

/// Returns every URL embedded in `text`, left to right.
///
/// Matches are non-overlapping and maximal, so a URL wrapped in quotes,
/// parentheses or angle brackets comes back without its delimiters.
pub fn extract_urls(text: &str) -> Vec<String> {
    EMBEDDED_URL
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True if `text`, ignoring surrounding whitespace, is exactly one URL.
pub fn is_url(text: &str) -> bool {
    WHOLE_URL.is_match(text.trim())
}
