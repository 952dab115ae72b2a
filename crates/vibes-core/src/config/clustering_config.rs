use serde::{Deserialize, Serialize};

use super::defaults;

/// K-means clustering parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// RNG seed, fixed for reproducibility given identical embeddings.
    pub seed: u64,
    /// Independent k-means runs; the lowest-inertia run wins.
    pub restarts: usize,
    pub max_iterations: u64,
    pub tolerance: f64,
    /// Groups smaller than this are dropped as noise.
    pub min_cluster_size: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            seed: defaults::DEFAULT_KMEANS_SEED,
            restarts: defaults::DEFAULT_KMEANS_RESTARTS,
            max_iterations: defaults::DEFAULT_KMEANS_MAX_ITERATIONS,
            tolerance: defaults::DEFAULT_KMEANS_TOLERANCE,
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
        }
    }
}
