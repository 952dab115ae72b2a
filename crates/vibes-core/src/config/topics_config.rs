use serde::{Deserialize, Serialize};

use super::defaults;

/// Contrastive TF-IDF settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicsConfig {
    /// Vocabulary cap: most frequent terms across all cluster documents.
    pub max_features: usize,
    pub keywords_per_cluster: usize,
}

impl Default for TopicsConfig {
    fn default() -> Self {
        Self {
            max_features: defaults::DEFAULT_TFIDF_MAX_FEATURES,
            keywords_per_cluster: defaults::DEFAULT_KEYWORDS_PER_CLUSTER,
        }
    }
}
