//! Hashed bag-of-n-grams embedder.
//!
//! Maps unigrams and adjacent bigrams into fixed-dimension buckets with
//! blake3, weights them by raw count and L2-normalizes. No network, fully
//! deterministic.

use std::collections::HashMap;

use vibes_core::errors::VibesResult;
use vibes_core::traits::IEmbeddingProvider;

/// Hashing fallback embedding provider.
///
/// Sentences sharing vocabulary land close together, which is enough for
/// k-means to separate topics when no neural provider is reachable.
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn bucket(term: &str, dims: usize) -> usize {
        let hash = blake3::hash(term.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash.as_bytes()[..8]);
        (u64::from_le_bytes(prefix) % dims as u64) as usize
    }

    /// Lowercase word tokens of two or more characters.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.chars().count() >= 2)
            .map(str::to_lowercase)
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        let mut counts: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *counts.entry(tok.clone()).or_default() += 1.0;
        }
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_default() += 1.0;
        }

        for (term, count) in &counts {
            vec[Self::bucket(term, self.dimensions)] += count;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> VibesResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> VibesResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn empty_text_returns_zero_vector() {
        let p = HashingEmbedder::new(128);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_is_unit_length() {
        let p = HashingEmbedder::new(256);
        let v = p.embed("The combat system feels weighty and rewarding").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn deterministic_across_instances() {
        let a = HashingEmbedder::new(384).embed("servers keep crashing").unwrap();
        let b = HashingEmbedder::new(384).embed("servers keep crashing").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn shared_vocabulary_scores_higher() {
        let p = HashingEmbedder::new(384);
        let a = p.embed("the soundtrack is gorgeous and moody").unwrap();
        let b = p.embed("gorgeous moody soundtrack throughout").unwrap();
        let c = p.embed("netcode lags during ranked matches").unwrap();
        assert!(cosine(&a, &b) > cosine(&a, &c));
    }

    #[test]
    fn batch_matches_individual() {
        let p = HashingEmbedder::new(64);
        let texts = vec!["maps are great".to_string(), "bots everywhere".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(text).unwrap());
        }
    }
}
