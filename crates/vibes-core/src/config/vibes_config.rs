//! Top-level configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    BucketConfig, ClusteringConfig, EmbeddingConfig, GenerationConfig, NormalizerConfig,
    ObservabilityConfig, PipelineConfig, TopicsConfig,
};
use crate::errors::ConfigError;
use crate::lexicon::Lexicon;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VIBES_*`)
/// 2. TOML file
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VibesConfig {
    pub embedding: EmbeddingConfig,
    pub generation: GenerationConfig,
    pub normalizer: NormalizerConfig,
    pub clustering: ClusteringConfig,
    pub topics: TopicsConfig,
    pub pipeline: PipelineConfig,
    pub lexicon: Lexicon,
    pub observability: ObservabilityConfig,
}

impl VibesConfig {
    /// Resolve defaults, the optional TOML file and `VIBES_*` overrides, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML string. Missing sections and keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Ok(config.with_lowercase_lexicon())
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(config.with_lowercase_lexicon())
    }

    fn with_lowercase_lexicon(mut self) -> Self {
        self.lexicon = self.lexicon.lowercased();
        self
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `VIBES_<SECTION>_<KEY>`. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut VibesConfig) {
        if let Ok(val) = std::env::var("VIBES_EMBEDDING_PROVIDER") {
            config.embedding.provider = val;
        }
        if let Ok(val) = std::env::var("VIBES_EMBEDDING_ENDPOINT") {
            config.embedding.endpoint = val;
        }
        if let Ok(val) = std::env::var("VIBES_EMBEDDING_MODEL") {
            config.embedding.model = val;
        }
        if let Ok(val) = std::env::var("VIBES_EMBEDDING_OLLAMA_URL") {
            config.embedding.ollama_url = val;
        }
        if let Ok(val) = std::env::var("VIBES_GENERATION_ENDPOINT") {
            config.generation.endpoint = val;
        }
        if let Ok(val) = std::env::var("VIBES_GENERATION_MODEL") {
            config.generation.model = val;
        }
        if let Ok(val) = std::env::var("VIBES_GENERATION_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.generation.timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("VIBES_PIPELINE_MAX_PARALLEL_GENERATIONS") {
            if let Ok(v) = val.parse::<usize>() {
                config.pipeline.max_parallel_generations = v;
            }
        }
        if let Ok(val) = std::env::var("VIBES_OBSERVABILITY_LOG_LEVEL") {
            config.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("VIBES_OBSERVABILITY_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json = v;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = &self.normalizer;
        if n.min_chars > n.max_chars {
            return Err(invalid("normalizer.min_chars", "must not exceed max_chars"));
        }
        if !(0.0..=1.0).contains(&n.min_ascii_letter_ratio) {
            return Err(invalid(
                "normalizer.min_ascii_letter_ratio",
                "must be between 0.0 and 1.0",
            ));
        }
        if self.clustering.restarts == 0 {
            return Err(invalid("clustering.restarts", "must be greater than 0"));
        }
        if self.clustering.min_cluster_size < 2 {
            return Err(invalid("clustering.min_cluster_size", "must be at least 2"));
        }
        if self.clustering.tolerance <= 0.0 {
            return Err(invalid("clustering.tolerance", "must be greater than 0"));
        }
        if self.topics.max_features == 0 {
            return Err(invalid("topics.max_features", "must be greater than 0"));
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(invalid(
                "generation.temperature",
                "must be between 0.0 and 2.0",
            ));
        }
        if self.generation.max_output_tokens == 0 {
            return Err(invalid(
                "generation.max_output_tokens",
                "must be greater than 0",
            ));
        }
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than 0"));
        }
        if self.pipeline.min_sentences == 0 {
            return Err(invalid("pipeline.min_sentences", "must be greater than 0"));
        }
        if self.pipeline.max_parallel_generations == 0 {
            return Err(invalid(
                "pipeline.max_parallel_generations",
                "must be greater than 0",
            ));
        }
        validate_bucket("pipeline.positive", &self.pipeline.positive)?;
        validate_bucket("pipeline.negative", &self.pipeline.negative)?;
        Ok(())
    }
}

fn validate_bucket(prefix: &str, bucket: &BucketConfig) -> Result<(), ConfigError> {
    if bucket.cluster_divisor == 0 {
        return Err(invalid(
            &format!("{prefix}.cluster_divisor"),
            "must be greater than 0",
        ));
    }
    if bucket.min_clusters == 0 || bucket.min_clusters > bucket.max_clusters {
        return Err(invalid(
            &format!("{prefix}.min_clusters"),
            "must be in 1..=max_clusters",
        ));
    }
    let Some(first) = bucket.points_tiers.first() else {
        return Err(invalid(
            &format!("{prefix}.points_tiers"),
            "must not be empty",
        ));
    };
    if first.min_sentences != 0 {
        return Err(invalid(
            &format!("{prefix}.points_tiers"),
            "first tier must start at 0 sentences",
        ));
    }
    let ascending = bucket
        .points_tiers
        .windows(2)
        .all(|w| w[0].min_sentences < w[1].min_sentences);
    if !ascending {
        return Err(invalid(
            &format!("{prefix}.points_tiers"),
            "tiers must be strictly ascending by min_sentences",
        ));
    }
    if bucket.points_tiers.iter().any(|t| t.max_points == 0) {
        return Err(invalid(
            &format!("{prefix}.points_tiers"),
            "max_points must be greater than 0",
        ));
    }
    Ok(())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
