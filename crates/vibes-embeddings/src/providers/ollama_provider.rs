//! Ollama local embedding provider.
//!
//! Talks to `/api/embed` on a local Ollama instance. The health check only
//! informs startup logging; every request is attempted.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vibes_core::config::EmbeddingConfig;
use vibes_core::errors::{EmbeddingError, VibesResult};
use vibes_core::traits::IEmbeddingProvider;

use super::check_dimensions;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Ollama local embedding provider.
pub struct OllamaProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
    dimensions: usize,
    timeout_secs: u64,
}

#[derive(Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaProvider {
    pub fn from_config(config: &EmbeddingConfig) -> VibesResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                provider: format!("ollama: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: config.ollama_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            dimensions: config.dimensions,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Check if the Ollama server is reachable right now.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.client.get(&url).timeout(HEALTH_CHECK_TIMEOUT).send() {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable");
                false
            }
        }
    }

    fn request_embeddings(&self, texts: &[String]) -> VibesResult<Vec<Vec<f32>>> {
        let url = format!("{}/api/embed", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&OllamaEmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    EmbeddingError::Timeout {
                        provider: "ollama".to_string(),
                        secs: self.timeout_secs,
                    }
                } else {
                    EmbeddingError::InferenceFailed {
                        reason: format!("Ollama HTTP error: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("Ollama returned {status}: {body}"),
            }
            .into());
        }

        let resp: OllamaEmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("Ollama JSON parse error: {e}"),
                })?;

        if resp.embeddings.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: resp.embeddings.len(),
            }
            .into());
        }

        check_dimensions(resp.embeddings, self.dimensions)
    }
}

impl IEmbeddingProvider for OllamaProvider {
    fn embed(&self, text: &str) -> VibesResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "empty Ollama response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> VibesResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        true
    }
}
