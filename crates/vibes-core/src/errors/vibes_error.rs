use super::{AnalysisError, ConfigError, EmbeddingError, GenerationError};

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum VibesError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("analysis error: {0}")]
    AnalysisError(#[from] AnalysisError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("external services unreachable: all {attempted} attempted calls failed")]
    ServicesUnreachable { attempted: usize },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type VibesResult<T> = Result<T, VibesError>;
