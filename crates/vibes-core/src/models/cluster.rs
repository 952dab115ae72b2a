use serde::{Deserialize, Serialize};

/// A group of semantically similar opinion sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicCluster {
    pub sentences: Vec<String>,
    /// Cardinality used for ranking.
    pub size: usize,
}

impl TopicCluster {
    pub fn new(sentences: Vec<String>) -> Self {
        let size = sentences.len();
        Self { sentences, size }
    }

    /// The cluster's pseudo-document: its sentences joined with spaces.
    pub fn document(&self) -> String {
        self.sentences.join(" ")
    }
}
