//! Span definitions per pipeline stage.

/// Span wrapping one `summarize` request.
#[macro_export]
macro_rules! summary_span {
    ($request_id:expr) => {
        tracing::info_span!("vibes.summary", request_id = %$request_id)
    };
}

/// Span wrapping one polarity bucket.
#[macro_export]
macro_rules! bucket_span {
    ($polarity:expr, $reviews:expr) => {
        tracing::info_span!("vibes.bucket", polarity = %$polarity, reviews = $reviews)
    };
}

/// Span wrapping one cluster's generation call.
#[macro_export]
macro_rules! generation_span {
    ($polarity:expr, $cluster:expr, $size:expr) => {
        tracing::debug_span!(
            "vibes.generation",
            polarity = %$polarity,
            cluster = $cluster,
            size = $size
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SUMMARY: &str = "vibes.summary";
    pub const BUCKET: &str = "vibes.bucket";
    pub const GENERATION: &str = "vibes.generation";
}
