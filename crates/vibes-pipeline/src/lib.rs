//! # vibes-pipeline
//!
//! Turns positive and negative review buckets into short aspect phrase
//! lists. Each bucket runs through an explicit state machine; per-cluster
//! generation fans out on a dedicated rayon pool.

pub mod accept;
pub mod bucket;
pub mod engine;
pub mod fanout;
pub mod sizing;

pub use accept::accept_candidates;
pub use bucket::BucketState;
pub use engine::SummaryEngine;
pub use fanout::GenerationPool;
