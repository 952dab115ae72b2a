//! Contrastive topic keywords: TF-IDF where each cluster is one document.

pub mod tfidf;

pub use tfidf::TopicModel;

use vibes_core::config::TopicsConfig;
use vibes_core::models::TopicCluster;
use vibes_core::Lexicon;

/// Distinctive keywords of `target_sentences` relative to every cluster.
///
/// The target is located by exact document text, first match. An unknown
/// target or an empty vocabulary yields no keywords.
pub fn extract_cluster_topic(
    target_sentences: &[String],
    all_clusters: &[TopicCluster],
    lexicon: &Lexicon,
    settings: &TopicsConfig,
) -> Vec<String> {
    let documents: Vec<String> = all_clusters.iter().map(TopicCluster::document).collect();
    let Ok(model) = TopicModel::fit(documents, &lexicon.stop_words(), settings.max_features) else {
        return Vec::new();
    };
    model.keywords_for(&target_sentences.join(" "), settings.keywords_per_cluster)
}
