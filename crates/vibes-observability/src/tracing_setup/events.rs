//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the sentence extraction result for a bucket.
pub fn sentences_extracted(polarity: &str, reviews: usize, sentences: usize) {
    tracing::info!(
        event = "sentences_extracted",
        polarity = %polarity,
        reviews = reviews,
        sentences = sentences,
        "sentences extracted"
    );
}

/// Log a finished bucket.
pub fn bucket_completed(polarity: &str, terminal: &str, clusters: usize, phrases: usize) {
    tracing::info!(
        event = "bucket_completed",
        polarity = %polarity,
        terminal = %terminal,
        clusters = clusters,
        phrases = phrases,
        "bucket completed"
    );
}

/// Log a candidate phrase dropped by a quality gate.
pub fn candidate_rejected(polarity: &str, reason: &str, raw: &str) {
    tracing::debug!(
        event = "candidate_rejected",
        polarity = %polarity,
        reason = %reason,
        raw = %raw,
        "candidate rejected"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a finished request.
pub fn summary_completed(praised: usize, criticized: usize, elapsed_ms: u128) {
    tracing::info!(
        event = "summary_completed",
        praised = praised,
        criticized = criticized,
        elapsed_ms = elapsed_ms as u64,
        "summary completed"
    );
}
