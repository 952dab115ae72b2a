//! Data shapes passed between pipeline stages.

mod cluster;
mod degradation_event;
mod polarity;
mod report;
mod summary;

pub use cluster::TopicCluster;
pub use degradation_event::DegradationEvent;
pub use polarity::Polarity;
pub use report::{BucketReport, BucketTerminal, CandidateStatus, SummaryReport};
pub use summary::SummaryResult;
