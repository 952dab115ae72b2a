//! # vibes-analysis
//!
//! In-process text analysis stages:
//! - `normalizer`: clean reviews and extract English opinion sentences
//! - `clustering`: k-means over sentence embeddings
//! - `topics`: contrastive TF-IDF keywords per cluster
//! - `profanity`: default word-list masker

pub mod clustering;
pub mod normalizer;
pub mod profanity;
pub mod topics;

pub use clustering::{cluster_sentences, cluster_sentences_reporting};
pub use normalizer::extract_sentences;
pub use profanity::WordListMasker;
pub use topics::{extract_cluster_topic, TopicModel};
