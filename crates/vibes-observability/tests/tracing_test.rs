//! Smoke tests for subscriber installation and event emission.

use vibes_core::config::ObservabilityConfig;
use vibes_observability::tracing_setup::{events, spans};
use vibes_observability::{init_tracing, init_tracing_with_filter};

#[test]
fn second_init_reports_already_installed() {
    let first = init_tracing_with_filter("debug", false);
    let second = init_tracing(&ObservabilityConfig::default());
    // Only one global subscriber can win, whichever test ran first.
    assert!(!(first && second));
}

#[test]
fn events_and_spans_emit_without_subscriber_panics() {
    let span = vibes_observability::summary_span!("req-1");
    let _guard = span.enter();
    let bucket = vibes_observability::bucket_span!("positive", 12usize);
    let _bucket = bucket.enter();
    events::sentences_extracted("positive", 12, 30);
    events::candidate_rejected("positive", "vague", "Great game overall");
    events::degradation_triggered("clustering", "timeout", "single-cluster");
    events::bucket_completed("positive", "accepted", 5, 3);
    events::summary_completed(3, 2, 120);
    assert_eq!(spans::names::SUMMARY, "vibes.summary");
}
