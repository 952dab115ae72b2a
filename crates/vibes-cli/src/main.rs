//! `vibes`: summarize a reviews JSON file into praised and criticized aspects.

mod input;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use vibes_analysis::WordListMasker;
use vibes_core::{Lexicon, VibesConfig};
use vibes_embeddings::create_provider;
use vibes_generation::ChatCompletionsProvider;
use vibes_observability::init_tracing;
use vibes_pipeline::SummaryEngine;

#[derive(Parser)]
#[command(name = "vibes", version, about = "Summarize review buckets into aspect phrases", long_about = None)]
struct Args {
    /// Reviews JSON file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, env = "VIBES_CONFIG")]
    config: Option<PathBuf>,

    /// Standalone lexicon TOML replacing the configured word lists
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Print per-bucket diagnostics along with the result
    #[arg(long)]
    report: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config =
        VibesConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = &args.lexicon {
        config.lexicon = Lexicon::from_file(path).context("failed to load lexicon")?;
    }
    init_tracing(&config.observability);

    let reviews = input::read_reviews(args.input.as_deref())?;
    debug!(
        positive = reviews.positive.len(),
        negative = reviews.negative.len(),
        "reviews loaded"
    );

    let embedder = create_provider(&config.embedding)?;
    let generator = ChatCompletionsProvider::from_config(&config.generation)?;
    let masker = WordListMasker::from_lexicon(&config.lexicon);
    let engine = SummaryEngine::new(embedder, Arc::new(generator), Arc::new(masker), config)?;

    let output = if args.report {
        let report = engine.summarize_with_report(&reviews.positive, &reviews.negative)?;
        to_json(&report, args.pretty)?
    } else {
        let result = engine.summarize(&reviews.positive, &reviews.negative)?;
        to_json(&result, args.pretty)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
