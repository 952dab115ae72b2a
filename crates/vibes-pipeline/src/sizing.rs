//! Volume-based sizing of cluster count and output length.

use vibes_core::config::BucketConfig;

/// `k = clamp(sentences / cluster_divisor, min_clusters, max_clusters)`.
pub fn cluster_count(sentences: usize, bucket: &BucketConfig) -> usize {
    let max = bucket.max_clusters.max(bucket.min_clusters);
    (sentences / bucket.cluster_divisor.max(1)).clamp(bucket.min_clusters, max)
}

/// Phrase budget from the highest tier the sentence count reaches.
pub fn max_points(sentences: usize, bucket: &BucketConfig) -> usize {
    bucket
        .points_tiers
        .iter()
        .rev()
        .find(|tier| sentences >= tier.min_sentences)
        .map(|tier| tier.max_points)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_cluster_count_is_clamped() {
        let b = BucketConfig::positive();
        assert_eq!(cluster_count(0, &b), 5);
        assert_eq!(cluster_count(99, &b), 5);
        assert_eq!(cluster_count(120, &b), 6);
        assert_eq!(cluster_count(159, &b), 7);
        assert_eq!(cluster_count(10_000, &b), 8);
    }

    #[test]
    fn negative_cluster_count_is_clamped() {
        let b = BucketConfig::negative();
        assert_eq!(cluster_count(4, &b), 3);
        assert_eq!(cluster_count(17, &b), 3);
        assert_eq!(cluster_count(45, &b), 4);
        assert_eq!(cluster_count(500, &b), 8);
    }

    #[test]
    fn positive_points_tiers() {
        let b = BucketConfig::positive();
        assert_eq!(max_points(4, &b), 3);
        assert_eq!(max_points(29, &b), 3);
        assert_eq!(max_points(30, &b), 4);
        assert_eq!(max_points(59, &b), 4);
        assert_eq!(max_points(60, &b), 5);
    }

    #[test]
    fn negative_points_tiers() {
        let b = BucketConfig::negative();
        assert_eq!(max_points(19, &b), 3);
        assert_eq!(max_points(20, &b), 4);
        assert_eq!(max_points(39, &b), 4);
        assert_eq!(max_points(40, &b), 5);
    }
}
