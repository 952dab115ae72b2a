//! Property tests for candidate acceptance and sizing.

use std::collections::HashSet;

use proptest::prelude::*;
use vibes_core::config::BucketConfig;
use vibes_pipeline::accept_candidates;
use vibes_pipeline::sizing::{cluster_count, max_points};

fn candidate() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("Varied maps".to_string()),
        Just("varied MAPS".to_string()),
        Just("Punchy weapons".to_string()),
        Just("Great soundtrack".to_string()),
        Just("GREAT SOUNDTRACK".to_string()),
        "[A-Za-z ]{3,20}",
    ])
}

proptest! {
    #[test]
    fn accepted_phrases_are_bounded_and_distinct(
        candidates in prop::collection::vec(candidate(), 0..12),
        max in 0usize..6,
    ) {
        let accepted = accept_candidates(&candidates, max);
        prop_assert!(accepted.len() <= max);

        let lowered: HashSet<String> = accepted.iter().map(|p| p.to_lowercase()).collect();
        prop_assert_eq!(lowered.len(), accepted.len());
    }

    #[test]
    fn accepted_phrases_keep_candidate_order(
        candidates in prop::collection::vec(candidate(), 0..12),
    ) {
        let accepted = accept_candidates(&candidates, usize::MAX);
        let present: Vec<&String> = candidates.iter().flatten().collect();
        let mut cursor = present.iter();
        for phrase in &accepted {
            prop_assert!(cursor.any(|p| *p == phrase));
        }

        let distinct: HashSet<String> = present.iter().map(|p| p.to_lowercase()).collect();
        prop_assert_eq!(accepted.len(), distinct.len());
    }

    #[test]
    fn sizing_stays_within_bounds(n in 0usize..10_000) {
        for bucket in [BucketConfig::positive(), BucketConfig::negative()] {
            let k = cluster_count(n, &bucket);
            prop_assert!((bucket.min_clusters..=bucket.max_clusters).contains(&k));
            prop_assert!((3..=5).contains(&max_points(n, &bucket)));
        }
    }

    #[test]
    fn max_points_never_shrinks_with_volume(a in 0usize..200, b in 0usize..200) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for bucket in [BucketConfig::positive(), BucketConfig::negative()] {
            prop_assert!(max_points(lo, &bucket) <= max_points(hi, &bucket));
        }
    }
}
