use serde::{Deserialize, Serialize};

use super::defaults;

/// Output size step: buckets with at least `min_sentences` sentences
/// emit up to `max_points` phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsTier {
    pub min_sentences: usize,
    pub max_points: usize,
}

impl PointsTier {
    pub const fn new(min_sentences: usize, max_points: usize) -> Self {
        Self {
            min_sentences,
            max_points,
        }
    }
}

/// Per-polarity sizing rules.
///
/// A `[pipeline.positive]` or `[pipeline.negative]` table replaces the
/// whole bucket, so every field must be given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketConfig {
    /// `k = clamp(sentences / cluster_divisor, min_clusters, max_clusters)`.
    pub cluster_divisor: usize,
    pub min_clusters: usize,
    pub max_clusters: usize,
    /// Ascending by `min_sentences`; the first tier starts at 0.
    pub points_tiers: Vec<PointsTier>,
    /// Emitted when no phrase is accepted.
    pub fallback: String,
}

impl BucketConfig {
    pub fn positive() -> Self {
        Self {
            cluster_divisor: 20,
            min_clusters: 5,
            max_clusters: 8,
            points_tiers: vec![
                PointsTier::new(0, 3),
                PointsTier::new(30, 4),
                PointsTier::new(60, 5),
            ],
            fallback: defaults::DEFAULT_PRAISED_FALLBACK.to_string(),
        }
    }

    pub fn negative() -> Self {
        Self {
            cluster_divisor: 10,
            min_clusters: 3,
            max_clusters: 8,
            points_tiers: vec![
                PointsTier::new(0, 3),
                PointsTier::new(20, 4),
                PointsTier::new(40, 5),
            ],
            fallback: defaults::DEFAULT_CRITICIZED_FALLBACK.to_string(),
        }
    }
}

/// Aggregator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Buckets with fewer extracted sentences go straight to the fallback.
    pub min_sentences: usize,
    /// Sentences per cluster sampled into the prompt.
    pub sample_sentences: usize,
    /// Keywords per cluster sampled into the prompt.
    pub sample_keywords: usize,
    /// Worker threads in the generation pool.
    pub max_parallel_generations: usize,
    pub positive: BucketConfig,
    pub negative: BucketConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_sentences: defaults::DEFAULT_MIN_SENTENCES,
            sample_sentences: defaults::DEFAULT_SAMPLE_SENTENCES,
            sample_keywords: defaults::DEFAULT_SAMPLE_KEYWORDS,
            max_parallel_generations: defaults::DEFAULT_MAX_PARALLEL_GENERATIONS,
            positive: BucketConfig::positive(),
            negative: BucketConfig::negative(),
        }
    }
}
