//! OpenAI-compatible embedding API provider.
//!
//! Blocking HTTP client with a per-call timeout and bounded retry with
//! exponential backoff. Every call goes to the endpoint; a failed request
//! leaves nothing behind for the next one.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vibes_core::config::EmbeddingConfig;
use vibes_core::errors::{ConfigError, EmbeddingError, VibesResult};
use vibes_core::traits::IEmbeddingProvider;

use super::check_dimensions;

/// Cloud API embedding provider.
pub struct ApiProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
    dimensions: usize,
    timeout_secs: u64,
    max_retries: u32,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
    dimensions: usize,
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f32>,
}

impl ApiProvider {
    pub fn new(config: &EmbeddingConfig, api_key: String) -> VibesResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                provider: format!("api: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            dimensions: config.dimensions,
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
        })
    }

    /// Build from config, reading the key from `config.api_key_env`.
    pub fn from_config(config: &EmbeddingConfig) -> VibesResult<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            ConfigError::MissingCredential {
                var: config.api_key_env.clone(),
            }
        })?;
        Self::new(config, api_key)
    }

    fn request_embeddings(&self, texts: &[String]) -> VibesResult<Vec<Vec<f32>>> {
        let mut last_err = None;
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                std::thread::sleep(Duration::from_millis(100 * 2u64.pow(attempt - 1)));
                debug!(attempt, "retrying API embedding request");
            }

            match self.send_request(texts) {
                Ok(embeddings) => return Ok(embeddings),
                Err(e) => {
                    warn!(attempt, error = %e, "API embedding request failed");
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "all retries exhausted".to_string(),
            }
            .into()
        }))
    }

    fn send_request(&self, texts: &[String]) -> VibesResult<Vec<Vec<f32>>> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
                dimensions: self.dimensions,
            })
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("API returned {status}: {body}"),
            }
            .into());
        }

        let mut resp: EmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("JSON parse error: {e}"),
                })?;

        if resp.data.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: resp.data.len(),
            }
            .into());
        }
        resp.data.sort_by_key(|d| d.index.unwrap_or(0));

        check_dimensions(
            resp.data.into_iter().map(|d| d.embedding).collect(),
            self.dimensions,
        )
    }

    fn transport_error(&self, e: reqwest::Error) -> EmbeddingError {
        if e.is_timeout() {
            EmbeddingError::Timeout {
                provider: self.name().to_string(),
                secs: self.timeout_secs,
            }
        } else {
            EmbeddingError::InferenceFailed {
                reason: format!("HTTP error: {e}"),
            }
        }
    }
}

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> VibesResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "empty response".to_string(),
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
