use serde::{Deserialize, Serialize};

/// Final output: accepted aspect phrases per polarity bucket.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryResult {
    pub praised: Vec<String>,
    pub criticized: Vec<String>,
}
