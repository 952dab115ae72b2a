//! Provider registry.
//!
//! Priority order:
//! 1. Configured primary (API or Ollama)
//! 2. Hashing embedder (always available, lowest quality)

pub mod api_provider;
pub mod hashing_embedder;
pub mod ollama_provider;

pub use api_provider::ApiProvider;
pub use hashing_embedder::HashingEmbedder;
pub use ollama_provider::OllamaProvider;

use std::sync::Arc;

use tracing::{info, warn};
use vibes_core::config::EmbeddingConfig;
use vibes_core::errors::{ConfigError, EmbeddingError, VibesResult};
use vibes_core::traits::IEmbeddingProvider;

use crate::DegradationChain;

/// Build the configured provider chain.
///
/// With `hashing_fallback` on, a primary that cannot be constructed is
/// skipped with a warning and the hashing embedder still serves requests.
pub fn create_provider(config: &EmbeddingConfig) -> VibesResult<Arc<dyn IEmbeddingProvider>> {
    let primary: Option<Box<dyn IEmbeddingProvider>> = match config.provider.as_str() {
        "hashing" => {
            info!(provider = "hashing", "using hashing embedding provider");
            return Ok(Arc::new(HashingEmbedder::new(config.dimensions)));
        }
        "api" => match ApiProvider::from_config(config) {
            Ok(p) => {
                info!(provider = "api", model = %config.model, "embedding provider configured");
                Some(Box::new(p))
            }
            Err(e) if config.hashing_fallback => {
                warn!(error = %e, "API embedding provider unavailable, using hashing fallback");
                None
            }
            Err(e) => return Err(e),
        },
        "ollama" => {
            let provider = OllamaProvider::from_config(config)?;
            if provider.health_check() {
                info!(provider = "ollama", model = %config.model, "embedding provider connected");
            } else {
                warn!("Ollama unavailable at startup");
            }
            Some(Box::new(provider))
        }
        other => {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.provider".to_string(),
                message: format!("unknown provider '{other}', expected api, ollama or hashing"),
            }
            .into())
        }
    };

    let mut chain = DegradationChain::new();
    if let Some(p) = primary {
        chain.push(p);
    }
    if config.hashing_fallback {
        chain.push(Box::new(HashingEmbedder::new(config.dimensions)));
    }
    Ok(Arc::new(chain))
}

/// Reject any vector whose length is not the configured dimensionality.
pub(crate) fn check_dimensions(
    vectors: Vec<Vec<f32>>,
    expected: usize,
) -> VibesResult<Vec<Vec<f32>>> {
    match vectors.iter().find(|v| v.len() != expected) {
        Some(bad) => Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: bad.len(),
        }
        .into()),
        None => Ok(vectors),
    }
}
