use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "api", "ollama", "hashing".
    pub provider: String,
    /// Endpoint for the "api" provider (OpenAI-compatible `/embeddings`).
    pub endpoint: String,
    /// Model name sent to the provider.
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Base URL of the Ollama server.
    pub ollama_url: String,
    /// Embedding dimensions. Requested from the API; any other length is an error.
    pub dimensions: usize,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
    /// Retries for the "api" provider.
    pub max_retries: u32,
    /// Append the hashing embedder to the provider chain.
    pub hashing_fallback: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_EMBEDDING_API_KEY_ENV.to_string(),
            ollama_url: defaults::DEFAULT_OLLAMA_URL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            timeout_secs: defaults::DEFAULT_EMBEDDING_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_EMBEDDING_MAX_RETRIES,
            hashing_fallback: defaults::DEFAULT_HASHING_FALLBACK,
        }
    }
}
