//! Service interfaces consumed by the pipeline.
//! Implementations are injected into the engine, never created implicitly.

pub mod embedding;
pub mod generation;
pub mod masker;

pub use embedding::IEmbeddingProvider;
pub use generation::IGenerationProvider;
pub use masker::IProfanityMasker;
