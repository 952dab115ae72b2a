use crate::errors::VibesResult;
use crate::models::DegradationEvent;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> VibesResult<Vec<f32>>;

    /// Embed a batch of texts. One vector per input, in input order.
    fn embed_batch(&self, texts: &[String]) -> VibesResult<Vec<Vec<f32>>>;

    /// Like `embed_batch`, plus any fallbacks taken while serving this call.
    fn embed_batch_reporting(
        &self,
        texts: &[String],
    ) -> VibesResult<(Vec<Vec<f32>>, Vec<DegradationEvent>)> {
        self.embed_batch(texts).map(|vectors| (vectors, Vec::new()))
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
