//! # vibes-core
//!
//! Foundation crate for the review vibes pipeline.
//! Defines the shared models, service traits, errors, config, and the
//! heuristic lexicon. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod lexicon;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VibesConfig;
pub use errors::{VibesError, VibesResult};
pub use lexicon::Lexicon;
pub use models::{Polarity, SummaryResult, TopicCluster};
