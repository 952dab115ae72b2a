//! OpenAI-compatible `/chat/completions` provider (OpenRouter by default).
//!
//! One blocking request per call with a per-call timeout. No retries.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vibes_core::config::GenerationConfig;
use vibes_core::errors::{ConfigError, GenerationError, VibesResult};
use vibes_core::traits::IGenerationProvider;

pub struct ChatCompletionsProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
    timeout_secs: u64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatContent,
}

#[derive(Deserialize)]
struct ChatContent {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionsProvider {
    pub fn new(config: &GenerationConfig, api_key: String) -> VibesResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::ProviderUnavailable {
                provider: format!("chat-completions: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Build from config, reading the key from `config.api_key_env`.
    pub fn from_config(config: &GenerationConfig) -> VibesResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingCredential {
                var: config.api_key_env.clone(),
            })?;
        Self::new(config, api_key)
    }

    fn transport_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout {
                provider: self.model.clone(),
                secs: self.timeout_secs,
            }
        } else {
            GenerationError::RequestFailed {
                reason: e.to_string(),
            }
        }
    }
}

impl IGenerationProvider for ChatCompletionsProvider {
    fn generate(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        temperature: f32,
    ) -> VibesResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: max_output_tokens,
            temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::BadStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: ChatResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                GenerationError::MalformedResponse {
                    reason: e.to_string(),
                }
            }
        })?;
        let content = extract_content(parsed)?;
        debug!(model = %self.model, chars = content.len(), "completion received");
        Ok(content)
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn extract_content(response: ChatResponse) -> Result<String, GenerationError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .ok_or_else(|| GenerationError::MalformedResponse {
            reason: "no choices[0].message.content".to_string(),
        })
}
