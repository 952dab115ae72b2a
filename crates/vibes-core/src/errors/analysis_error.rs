/// In-process analysis errors (clustering, vectorization).
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("clustering failed: {reason}")]
    ClusteringFailed { reason: String },

    #[error("empty vocabulary: every term was filtered out")]
    EmptyVocabulary,
}
