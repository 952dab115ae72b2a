//! Normalization of raw model output into a single phrase.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_BULLETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•*]+\s*").expect("valid regex"));

/// Reduce a model response to one bare phrase.
///
/// First line only, leading bullets and surrounding quotes removed,
/// whitespace collapsed, trailing periods dropped, and anything after a
/// `" - "` separator discarded.
pub fn clean_response(raw: &str) -> String {
    let first_line = raw.trim().lines().next().unwrap_or("").trim();
    let unbulleted = LEADING_BULLETS.replace(first_line, "");
    let unquoted = unbulleted.trim_matches(|c| c == '"' || c == '\'');
    let collapsed = unquoted.split_whitespace().collect::<Vec<_>>().join(" ");
    let phrase = collapsed.trim_end_matches('.').trim_end();

    match phrase.split_once(" - ") {
        Some((head, _)) => head.trim().to_string(),
        None => phrase.to_string(),
    }
}
