use serde::{Deserialize, Serialize};

use super::defaults;

/// Phrase generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// OpenAI-compatible chat completions endpoint.
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_GENERATION_ENDPOINT.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_GENERATION_API_KEY_ENV.to_string(),
            timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
            max_output_tokens: defaults::DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: defaults::DEFAULT_TEMPERATURE,
        }
    }
}
