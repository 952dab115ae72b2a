//! SummaryEngine: runs both polarity buckets and enforces the outage rule.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use uuid::Uuid;
use vibes_core::config::VibesConfig;
use vibes_core::errors::{VibesError, VibesResult};
use vibes_core::models::{BucketReport, Polarity, SummaryReport, SummaryResult};
use vibes_core::traits::{IEmbeddingProvider, IGenerationProvider, IProfanityMasker};
use vibes_generation::{PhraseGenerator, PhraseSettings};
use vibes_observability::tracing_setup::events;
use vibes_observability::{bucket_span, summary_span};

use crate::bucket::BucketContext;
use crate::fanout::GenerationPool;

/// Review summarizer.
///
/// Services are injected once; every `summarize` call is independent and
/// keeps no state between requests.
pub struct SummaryEngine {
    embedder: Arc<dyn IEmbeddingProvider>,
    masker: Arc<dyn IProfanityMasker>,
    generator: PhraseGenerator,
    /// Bounded worker pool for per-cluster generation calls.
    pool: GenerationPool,
    config: VibesConfig,
}

impl SummaryEngine {
    /// Validate `config` and build the generation pool.
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        generator: Arc<dyn IGenerationProvider>,
        masker: Arc<dyn IProfanityMasker>,
        config: VibesConfig,
    ) -> VibesResult<Self> {
        config.validate()?;
        let pool = GenerationPool::new(config.pipeline.max_parallel_generations)?;
        let generator = PhraseGenerator::new(
            generator,
            Arc::new(config.lexicon.clone()),
            PhraseSettings::from_config(&config.generation, &config.pipeline),
        );
        info!(
            embedder = embedder.name(),
            generator = generator.provider_name(),
            threads = pool.threads(),
            "summary engine ready"
        );
        Ok(Self {
            embedder,
            masker,
            generator,
            pool,
            config,
        })
    }

    pub fn config(&self) -> &VibesConfig {
        &self.config
    }

    /// Summarize both buckets into praised and criticized phrase lists.
    pub fn summarize(
        &self,
        positive_reviews: &[String],
        negative_reviews: &[String],
    ) -> VibesResult<SummaryResult> {
        self.summarize_with_report(positive_reviews, negative_reviews)
            .map(|report| report.result)
    }

    /// Same as [`summarize`](Self::summarize), plus per-bucket diagnostics.
    ///
    /// Fails with `ServicesUnreachable` only when external calls were made
    /// and every one of them failed.
    pub fn summarize_with_report(
        &self,
        positive_reviews: &[String],
        negative_reviews: &[String],
    ) -> VibesResult<SummaryReport> {
        let started = Instant::now();
        let span = summary_span!(Uuid::new_v4());

        let ((praised, praised_report), (criticized, criticized_report)) = rayon::join(
            || span.in_scope(|| self.run_bucket(Polarity::Positive, positive_reviews)),
            || span.in_scope(|| self.run_bucket(Polarity::Negative, negative_reviews)),
        );

        let attempted = praised_report.calls_attempted + criticized_report.calls_attempted;
        let failed = praised_report.calls_failed + criticized_report.calls_failed;
        if attempted > 0 && failed == attempted {
            span.in_scope(|| warn!(attempted, "every external call failed"));
            return Err(VibesError::ServicesUnreachable { attempted });
        }

        span.in_scope(|| {
            events::summary_completed(
                praised.len(),
                criticized.len(),
                started.elapsed().as_millis(),
            )
        });
        Ok(SummaryReport {
            result: SummaryResult {
                praised,
                criticized,
            },
            praised: praised_report,
            criticized: criticized_report,
        })
    }

    fn run_bucket(&self, polarity: Polarity, reviews: &[String]) -> (Vec<String>, BucketReport) {
        let bucket = match polarity {
            Polarity::Positive => &self.config.pipeline.positive,
            Polarity::Negative => &self.config.pipeline.negative,
        };
        let context = BucketContext {
            polarity,
            bucket,
            config: &self.config,
            embedder: self.embedder.as_ref(),
            masker: self.masker.as_ref(),
            generator: &self.generator,
            pool: &self.pool,
        };
        bucket_span!(polarity, reviews.len()).in_scope(|| context.run(reviews))
    }
}
