//! Title-to-filename sanitization.

/// Maximum length of a sanitized filename stem, in characters.
pub const MAX_STEM_CHARS: usize = 100;

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | '(' | ')')
}

/// Sanitizes an article title into a filename stem.
///
/// - Keeps ASCII letters and digits, space, and `-_.()`; drops everything else
/// - Trims leading/trailing spaces
/// - Limits length to 100 characters
///
/// The cut can expose a space, so the end is trimmed again; sanitizing twice
/// is the same as sanitizing once. May return an empty string.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name.chars().filter(|&c| is_allowed(c)).collect();
    let stem: String = kept.trim().chars().take(MAX_STEM_CHARS).collect();
    stem.trim_end().to_string()
}
