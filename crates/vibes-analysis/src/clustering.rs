//! Semantic clustering: seeded k-means over sentence embeddings.
//!
//! Groups below the minimum size are dropped as noise. Clusters come back
//! largest first; equal sizes keep label order.

use std::collections::HashSet;

use linfa::prelude::*;
use linfa_clustering::KMeans;
use ndarray::{Array1, Array2};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use tracing::debug;
use vibes_core::config::ClusteringConfig;
use vibes_core::errors::{AnalysisError, EmbeddingError, VibesResult};
use vibes_core::models::{DegradationEvent, TopicCluster};
use vibes_core::traits::IEmbeddingProvider;

/// Cluster `sentences` into at most `k` topic groups.
///
/// Fewer than `k` sentences lowers `k` to `max(2, len / 2)`. Fewer than two
/// sentences yield one pseudo-cluster holding all of them, without calling
/// the embedder.
pub fn cluster_sentences(
    sentences: &[String],
    k: usize,
    embedder: &dyn IEmbeddingProvider,
    params: &ClusteringConfig,
) -> VibesResult<Vec<TopicCluster>> {
    cluster_sentences_reporting(sentences, k, embedder, params).map(|(clusters, _)| clusters)
}

/// [`cluster_sentences`], plus the embedder fallbacks taken for this call.
pub fn cluster_sentences_reporting(
    sentences: &[String],
    k: usize,
    embedder: &dyn IEmbeddingProvider,
    params: &ClusteringConfig,
) -> VibesResult<(Vec<TopicCluster>, Vec<DegradationEvent>)> {
    let n = sentences.len();
    let mut k = if n < k { (n / 2).max(2) } else { k };

    if n < 2 {
        return Ok((vec![TopicCluster::new(sentences.to_vec())], Vec::new()));
    }

    let (embeddings, degradations) = embedder.embed_batch_reporting(sentences)?;
    let records = to_matrix(&embeddings, n, embedder.dimensions())?;

    let distinct = distinct_rows(&embeddings);
    if distinct < k {
        debug!(k, distinct, "fewer distinct embeddings than clusters, lowering k");
        k = distinct;
    }

    let labels = assign_labels(&records, k, params)?;
    Ok((
        group(sentences, &labels, k, params.min_cluster_size),
        degradations,
    ))
}

/// Validate shape and build an `n x dims` matrix.
fn to_matrix(
    embeddings: &[Vec<f32>],
    n: usize,
    expected_dims: usize,
) -> VibesResult<Array2<f64>> {
    if embeddings.len() != n {
        return Err(EmbeddingError::CountMismatch {
            expected: n,
            actual: embeddings.len(),
        }
        .into());
    }
    let dims = embeddings.first().map(Vec::len).unwrap_or(0);
    if dims == 0 {
        return Err(EmbeddingError::DimensionMismatch {
            expected: expected_dims,
            actual: 0,
        }
        .into());
    }
    if let Some(bad) = embeddings.iter().find(|e| e.len() != dims) {
        return Err(EmbeddingError::DimensionMismatch {
            expected: dims,
            actual: bad.len(),
        }
        .into());
    }

    let flat: Vec<f64> = embeddings.iter().flatten().map(|&v| f64::from(v)).collect();
    Array2::from_shape_vec((n, dims), flat).map_err(|e| {
        AnalysisError::ClusteringFailed {
            reason: format!("failed to build embedding matrix: {e}"),
        }
        .into()
    })
}

fn distinct_rows(embeddings: &[Vec<f32>]) -> usize {
    embeddings
        .iter()
        .map(|row| row.iter().map(|v| v.to_bits()).collect::<Vec<u32>>())
        .collect::<HashSet<_>>()
        .len()
}

fn assign_labels(
    records: &Array2<f64>,
    k: usize,
    params: &ClusteringConfig,
) -> VibesResult<Vec<usize>> {
    if k <= 1 {
        return Ok(vec![0; records.nrows()]);
    }

    let dataset = DatasetBase::new(records.clone(), Array1::from_elem(records.nrows(), ()));
    let rng = Xoshiro256Plus::seed_from_u64(params.seed);
    let model = KMeans::params_with_rng(k, rng)
        .n_runs(params.restarts)
        .max_n_iterations(params.max_iterations)
        .tolerance(params.tolerance)
        .fit(&dataset)
        .map_err(|e| AnalysisError::ClusteringFailed {
            reason: format!("k-means failed: {e}"),
        })?;

    let predictions = model.predict(records);
    Ok(predictions.iter().copied().collect())
}

/// Bucket sentences by label, drop small groups, sort by size descending.
fn group(
    sentences: &[String],
    labels: &[usize],
    k: usize,
    min_cluster_size: usize,
) -> Vec<TopicCluster> {
    let mut groups: Vec<Vec<String>> = vec![Vec::new(); k.max(1)];
    for (sentence, &label) in sentences.iter().zip(labels) {
        if let Some(g) = groups.get_mut(label) {
            g.push(sentence.clone());
        }
    }

    let mut clusters: Vec<TopicCluster> = groups
        .into_iter()
        .filter(|g| g.len() >= min_cluster_size)
        .map(TopicCluster::new)
        .collect();
    clusters.sort_by_key(|c| std::cmp::Reverse(c.size));
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn grouping_is_stable_and_filters_singletons() {
        let sentences = owned(&["a", "b", "c", "d", "e", "f"]);
        let labels = [2, 0, 2, 1, 0, 3];
        let clusters = group(&sentences, &labels, 4, 2);
        assert_eq!(clusters.len(), 2);
        // Label 0 and label 2 both have two members; label order wins.
        assert_eq!(clusters[0].sentences, owned(&["b", "e"]));
        assert_eq!(clusters[1].sentences, owned(&["a", "c"]));
    }

    #[test]
    fn distinct_rows_counts_exact_duplicates() {
        let rows = vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
        assert_eq!(distinct_rows(&rows), 2);
    }

    #[test]
    fn ragged_embeddings_are_rejected() {
        let rows = vec![vec![1.0, 0.0], vec![1.0]];
        assert!(to_matrix(&rows, 2, 2).is_err());
        assert!(to_matrix(&rows[..1], 2, 2).is_err());
    }
}
