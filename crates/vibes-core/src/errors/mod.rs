//! Error handling for the pipeline.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod embedding_error;
pub mod generation_error;
pub mod vibes_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use generation_error::GenerationError;
pub use vibes_error::{VibesError, VibesResult};
