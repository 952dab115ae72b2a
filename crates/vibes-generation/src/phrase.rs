//! Phrase generator: prompt, one generation call, post-processing, gates.

use std::sync::Arc;

use tracing::debug;
use vibes_core::config::{GenerationConfig, PipelineConfig};
use vibes_core::errors::VibesResult;
use vibes_core::models::Polarity;
use vibes_core::traits::IGenerationProvider;
use vibes_core::Lexicon;

use crate::gates::{self, RejectionReason};
use crate::postprocess::clean_response;
use crate::prompt::build_prompt;

/// Result of one generation attempt that reached the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Accepted(String),
    Rejected {
        /// Post-processed text that failed a gate.
        raw: String,
        reason: RejectionReason,
    },
}

impl GenerationOutcome {
    pub fn into_phrase(self) -> Option<String> {
        match self {
            Self::Accepted(phrase) => Some(phrase),
            Self::Rejected { .. } => None,
        }
    }
}

/// Tunables for prompt sampling and the generation call.
#[derive(Debug, Clone, Copy)]
pub struct PhraseSettings {
    pub sample_sentences: usize,
    pub sample_keywords: usize,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl PhraseSettings {
    pub fn from_config(generation: &GenerationConfig, pipeline: &PipelineConfig) -> Self {
        Self {
            sample_sentences: pipeline.sample_sentences,
            sample_keywords: pipeline.sample_keywords,
            max_output_tokens: generation.max_output_tokens,
            temperature: generation.temperature,
        }
    }
}

impl Default for PhraseSettings {
    fn default() -> Self {
        Self::from_config(&GenerationConfig::default(), &PipelineConfig::default())
    }
}

/// Produces one aspect phrase per cluster. Stateless across calls.
pub struct PhraseGenerator {
    provider: Arc<dyn IGenerationProvider>,
    lexicon: Arc<Lexicon>,
    settings: PhraseSettings,
}

impl PhraseGenerator {
    pub fn new(
        provider: Arc<dyn IGenerationProvider>,
        lexicon: Arc<Lexicon>,
        settings: PhraseSettings,
    ) -> Self {
        Self {
            provider,
            lexicon,
            settings,
        }
    }

    /// Generate and gate a phrase. Provider failures are returned as `Err`.
    pub fn generate(
        &self,
        cluster_sentences: &[String],
        keywords: &[String],
        polarity: Polarity,
    ) -> VibesResult<GenerationOutcome> {
        let prompt = build_prompt(
            cluster_sentences,
            keywords,
            polarity,
            self.settings.sample_sentences,
            self.settings.sample_keywords,
        );
        let response = self.provider.generate(
            &prompt,
            self.settings.max_output_tokens,
            self.settings.temperature,
        )?;
        let phrase = clean_response(&response);

        Ok(match gates::check(&phrase, polarity, &self.lexicon) {
            Ok(()) => GenerationOutcome::Accepted(phrase),
            Err(reason) => {
                debug!(%polarity, %reason, phrase = %phrase, "phrase failed quality gate");
                GenerationOutcome::Rejected { raw: phrase, reason }
            }
        })
    }

    /// `Some(phrase)` if accepted, `None` if a gate rejected it.
    pub fn generate_summary(
        &self,
        cluster_sentences: &[String],
        keywords: &[String],
        polarity: Polarity,
    ) -> VibesResult<Option<String>> {
        self.generate(cluster_sentences, keywords, polarity)
            .map(GenerationOutcome::into_phrase)
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}
