//! Fallback chain for embedding generation.
//!
//! Tries providers in order. A fallback is logged as a degradation event
//! and handed back to the caller of that one call; the chain keeps nothing.

use tracing::warn;
use vibes_core::errors::{EmbeddingError, VibesResult};
use vibes_core::models::DegradationEvent;
use vibes_core::traits::IEmbeddingProvider;
use vibes_observability::tracing_setup::events;

const EMBEDDINGS_COMPONENT: &str = "embeddings";

/// Ordered list of providers; the first that answers wins.
pub struct DegradationChain {
    chain: Vec<Box<dyn IEmbeddingProvider>>,
}

impl Default for DegradationChain {
    fn default() -> Self {
        Self::new()
    }
}

impl DegradationChain {
    pub fn new() -> Self {
        Self { chain: Vec::new() }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.chain.push(provider);
    }

    /// Run `op` against each available provider until one succeeds.
    ///
    /// An answer from anything but the first provider carries the
    /// degradation event describing the fallback.
    fn run<T>(
        &self,
        what: &str,
        op: impl Fn(&dyn IEmbeddingProvider) -> VibesResult<T>,
    ) -> VibesResult<(T, Option<DegradationEvent>)> {
        let mut last_error = None;

        for (i, provider) in self.chain.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }

            match op(provider.as_ref()) {
                Ok(value) => {
                    let event = (i > 0).then(|| self.fallback_event(provider.name()));
                    return Ok((value, event));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "{what} failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: format!("all {} providers exhausted", self.chain.len()),
            }
            .into()
        }))
    }

    fn fallback_event(&self, fallback: &str) -> DegradationEvent {
        let primary = self.chain.first().map(|p| p.name()).unwrap_or("unknown");
        let failure = format!("{primary} unavailable");
        events::degradation_triggered(EMBEDDINGS_COMPONENT, &failure, fallback);
        DegradationEvent::now(EMBEDDINGS_COMPONENT, failure, fallback)
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl IEmbeddingProvider for DegradationChain {
    fn embed(&self, text: &str) -> VibesResult<Vec<f32>> {
        self.run("embed", |p| p.embed(text)).map(|(v, _)| v)
    }

    fn embed_batch(&self, texts: &[String]) -> VibesResult<Vec<Vec<f32>>> {
        self.embed_batch_reporting(texts).map(|(v, _)| v)
    }

    fn embed_batch_reporting(
        &self,
        texts: &[String],
    ) -> VibesResult<(Vec<Vec<f32>>, Vec<DegradationEvent>)> {
        self.run("batch embed", |p| p.embed_batch(texts))
            .map(|(vectors, event)| (vectors, event.into_iter().collect()))
    }

    fn dimensions(&self) -> usize {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .or_else(|| self.chain.first())
            .map(|p| p.dimensions())
            .unwrap_or(0)
    }

    fn name(&self) -> &str {
        "degradation-chain"
    }

    fn is_available(&self) -> bool {
        self.chain.iter().any(|p| p.is_available())
    }
}
