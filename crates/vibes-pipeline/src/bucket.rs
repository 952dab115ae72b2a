//! Per-bucket state machine.
//!
//! ```text
//! Pending → Extracted → InsufficientInput → Fallback
//!                     → Clustered → Generated → Accepted | Fallback
//! ```
//!
//! Every transition updates the bucket's `BucketReport`. Only `Accepted`
//! and `Fallback` are terminal.

use tracing::{debug, Span};
use vibes_analysis::{cluster_sentences_reporting, extract_sentences, TopicModel};
use vibes_core::config::{BucketConfig, VibesConfig};
use vibes_core::errors::{VibesError, VibesResult};
use vibes_core::models::{
    BucketReport, BucketTerminal, CandidateStatus, DegradationEvent, Polarity, TopicCluster,
};
use vibes_core::traits::{IEmbeddingProvider, IProfanityMasker};
use vibes_generation::{GenerationOutcome, PhraseGenerator};
use vibes_observability::generation_span;
use vibes_observability::tracing_setup::events;

use crate::accept::accept_candidates;
use crate::fanout::GenerationPool;
use crate::sizing;

const CLUSTERING_COMPONENT: &str = "clustering";
const SINGLE_CLUSTER_FALLBACK: &str = "single-cluster";
const GENERATION_COMPONENT: &str = "generation";
const ABSENT_CANDIDATE_FALLBACK: &str = "absent-candidate";

/// Where a bucket run currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum BucketState<'a> {
    Pending(&'a [String]),
    Extracted(Vec<String>),
    InsufficientInput,
    Clustered {
        clusters: Vec<TopicCluster>,
        keywords: Vec<Vec<String>>,
        max_points: usize,
    },
    /// One candidate per cluster, in cluster order.
    Generated {
        candidates: Vec<Option<String>>,
        max_points: usize,
    },
    Accepted(Vec<String>),
    Fallback,
}

impl BucketState<'_> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted(_) | Self::Fallback)
    }
}

/// Services and settings one bucket run borrows from the engine.
pub(crate) struct BucketContext<'a> {
    pub polarity: Polarity,
    pub bucket: &'a BucketConfig,
    pub config: &'a VibesConfig,
    pub embedder: &'a dyn IEmbeddingProvider,
    pub masker: &'a dyn IProfanityMasker,
    pub generator: &'a PhraseGenerator,
    pub pool: &'a GenerationPool,
}

impl<'a> BucketContext<'a> {
    /// Drive the bucket from `Pending` to a terminal state.
    pub fn run(&self, reviews: &'a [String]) -> (Vec<String>, BucketReport) {
        let mut report = BucketReport::new(self.polarity, 0);
        let mut state = BucketState::Pending(reviews);
        while !state.is_terminal() {
            state = self.step(state, &mut report);
        }

        let phrases = match state {
            BucketState::Accepted(phrases) => phrases,
            _ => vec![self.bucket.fallback.clone()],
        };
        let accepted = match report.terminal {
            BucketTerminal::Accepted => phrases.len(),
            _ => 0,
        };
        events::bucket_completed(
            self.polarity.as_str(),
            terminal_name(report.terminal),
            report.cluster_sizes.len(),
            accepted,
        );
        (phrases, report)
    }

    fn step(&self, state: BucketState<'a>, report: &mut BucketReport) -> BucketState<'a> {
        match state {
            BucketState::Pending(reviews) => {
                let sentences = extract_sentences(
                    reviews,
                    self.masker,
                    &self.config.lexicon,
                    &self.config.normalizer,
                );
                report.sentence_count = sentences.len();
                events::sentences_extracted(
                    self.polarity.as_str(),
                    reviews.len(),
                    sentences.len(),
                );
                BucketState::Extracted(sentences)
            }
            BucketState::Extracted(sentences)
                if sentences.len() < self.config.pipeline.min_sentences =>
            {
                BucketState::InsufficientInput
            }
            BucketState::Extracted(sentences) => self.cluster(sentences, report),
            BucketState::InsufficientInput => {
                report.terminal = BucketTerminal::InsufficientInput;
                BucketState::Fallback
            }
            BucketState::Clustered {
                clusters,
                keywords,
                max_points,
            } => BucketState::Generated {
                candidates: self.generate(&clusters, &keywords, report),
                max_points,
            },
            BucketState::Generated {
                candidates,
                max_points,
            } => {
                let phrases = accept_candidates(&candidates, max_points);
                if phrases.is_empty() {
                    report.terminal = BucketTerminal::NoAcceptedCandidates;
                    BucketState::Fallback
                } else {
                    report.terminal = BucketTerminal::Accepted;
                    BucketState::Accepted(phrases)
                }
            }
            terminal => terminal,
        }
    }

    fn cluster(&self, sentences: Vec<String>, report: &mut BucketReport) -> BucketState<'a> {
        let n = sentences.len();
        let k = sizing::cluster_count(n, self.bucket);
        let max_points = sizing::max_points(n, self.bucket);
        report.requested_clusters = k;
        report.max_points = max_points;

        // The embedder is only consulted for two or more sentences.
        let embeds = n >= 2;
        if embeds {
            report.calls_attempted += 1;
        }

        let clustered = cluster_sentences_reporting(
            &sentences,
            k,
            self.embedder,
            &self.config.clustering,
        );
        let clusters = match clustered {
            Ok((clusters, fallbacks)) => {
                // Embedder fallbacks already logged themselves.
                report.degradations.extend(fallbacks);
                clusters
            }
            Err(err) => {
                if embeds && matches!(err, VibesError::EmbeddingError(_)) {
                    report.calls_failed += 1;
                }
                degrade(
                    report,
                    CLUSTERING_COMPONENT,
                    &err.to_string(),
                    SINGLE_CLUSTER_FALLBACK,
                );
                vec![TopicCluster::new(sentences)]
            }
        };

        let keywords = self.keywords(&clusters);
        report.cluster_sizes = clusters.iter().map(|c| c.size).collect();

        BucketState::Clustered {
            clusters,
            keywords,
            max_points,
        }
    }

    /// Fit one topic model over the bucket's clusters and query each one.
    fn keywords(&self, clusters: &[TopicCluster]) -> Vec<Vec<String>> {
        let documents: Vec<String> = clusters.iter().map(TopicCluster::document).collect();
        let topics = &self.config.topics;
        match TopicModel::fit(
            documents.clone(),
            &self.config.lexicon.stop_words(),
            topics.max_features,
        ) {
            Ok(model) => documents
                .iter()
                .map(|doc| model.keywords_for(doc, topics.keywords_per_cluster))
                .collect(),
            Err(err) => {
                debug!(polarity = %self.polarity, error = %err, "no topic keywords");
                vec![Vec::new(); clusters.len()]
            }
        }
    }

    /// One generation call per cluster on the pool, then fold outcomes into
    /// candidates sequentially.
    fn generate(
        &self,
        clusters: &[TopicCluster],
        keywords: &[Vec<String>],
        report: &mut BucketReport,
    ) -> Vec<Option<String>> {
        let polarity = self.polarity;
        let parent = Span::current();
        let work: Vec<(&TopicCluster, &Vec<String>)> = clusters.iter().zip(keywords).collect();

        let outcomes: Vec<VibesResult<GenerationOutcome>> =
            self.pool.map_ordered(&work, |i, (cluster, keywords)| {
                parent.in_scope(|| {
                    let _span = generation_span!(polarity, i, cluster.size).entered();
                    self.generator
                        .generate(&cluster.sentences, keywords, polarity)
                })
            });

        report.calls_attempted += outcomes.len();
        outcomes
            .into_iter()
            .map(|outcome| match outcome {
                Ok(GenerationOutcome::Accepted(phrase)) => {
                    report.candidates.push(CandidateStatus::Phrase {
                        text: phrase.clone(),
                    });
                    Some(phrase)
                }
                Ok(GenerationOutcome::Rejected { raw, reason }) => {
                    events::candidate_rejected(polarity.as_str(), reason.as_str(), &raw);
                    report.candidates.push(CandidateStatus::Rejected {
                        reason: reason.to_string(),
                    });
                    None
                }
                Err(err) => {
                    let error = err.to_string();
                    report.calls_failed += 1;
                    degrade(report, GENERATION_COMPONENT, &error, ABSENT_CANDIDATE_FALLBACK);
                    report.candidates.push(CandidateStatus::Failed { error });
                    None
                }
            })
            .collect()
    }
}

fn degrade(report: &mut BucketReport, component: &str, failure: &str, fallback: &str) {
    events::degradation_triggered(component, failure, fallback);
    report
        .degradations
        .push(DegradationEvent::now(component, failure, fallback));
}

fn terminal_name(terminal: BucketTerminal) -> &'static str {
    match terminal {
        BucketTerminal::Accepted => "accepted",
        BucketTerminal::InsufficientInput => "insufficient_input",
        BucketTerminal::NoAcceptedCandidates => "no_accepted_candidates",
    }
}
