//! # vibes-embeddings
//!
//! Sentence embedding providers behind `IEmbeddingProvider`:
//! an OpenAI-compatible HTTP API, a local Ollama server, and a
//! deterministic hashing embedder that is always available.
//! `DegradationChain` tries them in order and reports each fallback to its caller.

pub mod degradation;
pub mod providers;

pub use degradation::DegradationChain;
pub use providers::{create_provider, ApiProvider, HashingEmbedder, OllamaProvider};
