//! # vibes-generation
//!
//! Turns one cluster of review sentences plus its topic keywords into a
//! short aspect phrase. The phrase passes through post-processing and
//! lexical quality gates before it is accepted.

pub mod gates;
pub mod phrase;
pub mod postprocess;
pub mod prompt;
pub mod providers;

pub use gates::RejectionReason;
pub use phrase::{GenerationOutcome, PhraseGenerator, PhraseSettings};
pub use providers::ChatCompletionsProvider;
