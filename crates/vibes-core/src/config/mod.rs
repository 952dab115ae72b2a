//! Configuration system.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod clustering_config;
pub mod defaults;
pub mod embedding_config;
pub mod generation_config;
pub mod normalizer_config;
pub mod observability_config;
pub mod pipeline_config;
pub mod topics_config;
pub mod vibes_config;

pub use clustering_config::ClusteringConfig;
pub use embedding_config::EmbeddingConfig;
pub use generation_config::GenerationConfig;
pub use normalizer_config::NormalizerConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::{BucketConfig, PipelineConfig, PointsTier};
pub use topics_config::TopicsConfig;
pub use vibes_config::VibesConfig;
