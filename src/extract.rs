//! Recovers a JSON array substring from a free-text model reply.
//!
//! Model output is not guaranteed to be bare JSON; it is routinely wrapped
//! in prose or markdown fences. Two patterns are tried in order: a strict
//! one requiring at least one `{...}` object inside the brackets, then the
//! loosest possible outermost-bracket match.

use regex::Regex;
use std::sync::LazyLock;

/// Array containing at least one object, tolerating surrounding text.
static STRICT_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[\s*\{.*\}\s*\]").expect("strict array pattern compiles"));

/// Anything between the first `[` and the last `]`, greedy.
static LOOSE_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("loose array pattern compiles"));

/// Locate the candidate JSON array text inside a raw reply.
///
/// Returns `None` when neither pattern matches, which the pipeline reports
/// as an extraction failure.
pub fn extract_json_array(text: &str) -> Option<&str> {
    if let Some(m) = STRICT_ARRAY.find(text) {
        return Some(m.as_str());
    }

    tracing::warn!("No object-bearing JSON array in reply, trying loose bracket match");
    LOOSE_ARRAY.find(text).map(|m| m.as_str())
}
