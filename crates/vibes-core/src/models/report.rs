use serde::{Deserialize, Serialize};

use super::{DegradationEvent, Polarity, SummaryResult};

/// How a bucket run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketTerminal {
    /// At least one phrase was accepted.
    Accepted,
    /// Too few sentences survived normalization; clustering was skipped.
    InsufficientInput,
    /// Clusters were generated but every candidate was absent.
    NoAcceptedCandidates,
}

/// Outcome of one cluster's generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CandidateStatus {
    Phrase { text: String },
    Rejected { reason: String },
    Failed { error: String },
}

/// Diagnostics for one polarity bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketReport {
    pub polarity: Polarity,
    pub sentence_count: usize,
    pub requested_clusters: usize,
    pub max_points: usize,
    pub cluster_sizes: Vec<usize>,
    pub candidates: Vec<CandidateStatus>,
    pub terminal: BucketTerminal,
    pub degradations: Vec<DegradationEvent>,
    /// External calls attempted / failed while processing this bucket.
    pub calls_attempted: usize,
    pub calls_failed: usize,
}

impl BucketReport {
    pub fn new(polarity: Polarity, sentence_count: usize) -> Self {
        Self {
            polarity,
            sentence_count,
            requested_clusters: 0,
            max_points: 0,
            cluster_sizes: Vec::new(),
            candidates: Vec::new(),
            terminal: BucketTerminal::InsufficientInput,
            degradations: Vec::new(),
            calls_attempted: 0,
            calls_failed: 0,
        }
    }
}

/// Summary plus per-bucket diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub result: SummaryResult,
    pub praised: BucketReport,
    pub criticized: BucketReport,
}
