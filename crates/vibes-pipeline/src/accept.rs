//! Fan-in: ordered, case-insensitive dedup of candidate phrases.

use std::collections::HashSet;

/// Walk candidates in cluster order, keeping present phrases that are not
/// case-insensitive duplicates, up to `max_points`.
pub fn accept_candidates(candidates: &[Option<String>], max_points: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut accepted = Vec::new();

    for phrase in candidates.iter().flatten() {
        if accepted.len() >= max_points {
            break;
        }
        if seen.insert(phrase.to_lowercase()) {
            accepted.push(phrase.clone());
        }
    }
    accepted
}
