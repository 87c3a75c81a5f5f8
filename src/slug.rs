//! Filename sanitisation.
//!
//! Output paths are derived from input file stems and spreadsheet sheet
//! names, both of which are arbitrary user strings. [`slugify`] maps any
//! string to a token that is safe as a single path component on Linux,
//! macOS, and Windows: no separators, no shell-hostile punctuation, no
//! surrounding whitespace, bounded length.
//!
//! The function is total (never fails), deterministic, and idempotent —
//! `slugify(slugify(s)) == slugify(s)` for every input.

use crate::config::DEFAULT_SLUG_MAX_LEN;
use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when sanitisation leaves nothing usable behind.
pub const SLUG_FALLBACK: &str = "untitled";

// `\w` is Unicode-aware in the regex crate, so accented letters and CJK
// survive sanitisation; only genuinely unsafe punctuation is replaced.
static RE_UNSAFE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\-. ]+").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Sanitize `name` into a filesystem-safe path component of at most
/// `max_len` characters.
///
/// Steps, in order:
/// 1. trim surrounding whitespace
/// 2. replace path separators (`/` and `\`) with `_`
/// 3. collapse each run of characters outside `{\w, -, ., space}` to one `_`
/// 4. collapse whitespace runs to `_`
/// 5. strip leading/trailing `_`
/// 6. truncate to `max_len` characters, re-stripping any `_` the cut exposes
/// 7. fall back to [`SLUG_FALLBACK`] if nothing remains
///
/// Truncation counts `char`s, not bytes, so multi-byte input can never be
/// cut on a UTF-8 boundary.
pub fn slugify(name: &str, max_len: usize) -> String {
    let trimmed = name.trim();
    let no_separators = trimmed.replace(['/', '\\'], "_");
    let safe = RE_UNSAFE.replace_all(&no_separators, "_");
    let collapsed = RE_WHITESPACE.replace_all(&safe, "_");
    let stripped = collapsed.trim_matches('_');

    let truncated: String = stripped.chars().take(max_len).collect();
    // The cut can expose a trailing '_' that step 5 already removed once;
    // stripping it again keeps the function idempotent.
    let result = truncated.trim_end_matches('_');

    if result.is_empty() {
        SLUG_FALLBACK.to_string()
    } else {
        result.to_string()
    }
}

/// [`slugify`] with the default length limit.
pub fn slugify_default(name: &str) -> String {
    slugify(name, DEFAULT_SLUG_MAX_LEN)
}
