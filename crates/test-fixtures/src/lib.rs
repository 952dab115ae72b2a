//! Test fixtures for the review vibes workspace.
//!
//! Review corpora as JSON plus deterministic stand-ins for the external
//! services, so pipeline tests never touch the network.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use vibes_core::errors::{EmbeddingError, GenerationError, VibesResult};
use vibes_core::traits::{IEmbeddingProvider, IGenerationProvider, IProfanityMasker};

/// Root directory of the JSON corpora.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("reviews")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Positive and negative review buckets.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewCorpus {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Load one of the `reviews/*.json` corpora.
pub fn load_corpus(name: &str) -> ReviewCorpus {
    load_fixture(name)
}

// ---------------------------------------------------------------------------
// Embedders
// ---------------------------------------------------------------------------

/// Deterministic keyword-bucket embedder.
///
/// Dimension `i` is set when the sentence mentions any keyword of topic `i`;
/// sentences matching no topic go to a trailing catch-all dimension.
/// Sentences about the same topic get identical vectors.
pub struct TopicEmbedder {
    topics: Vec<Vec<String>>,
    calls: AtomicUsize,
}

impl TopicEmbedder {
    pub fn new(topics: &[&[&str]]) -> Self {
        Self {
            topics: topics
                .iter()
                .map(|t| t.iter().map(|k| k.to_lowercase()).collect())
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `embed`/`embed_batch` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let lower = text.to_lowercase();
        let mut v = vec![0.0; self.topics.len() + 1];
        let slot = self
            .topics
            .iter()
            .position(|keys| keys.iter().any(|k| lower.contains(k.as_str())))
            .unwrap_or(self.topics.len());
        v[slot] = 1.0;
        v
    }
}

impl IEmbeddingProvider for TopicEmbedder {
    fn embed(&self, text: &str) -> VibesResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> VibesResult<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.topics.len() + 1
    }

    fn name(&self) -> &str {
        "topic-stub"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Embedder that always fails.
#[derive(Default)]
pub struct FailingEmbedder {
    calls: AtomicUsize,
}

impl FailingEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> VibesResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(EmbeddingError::ProviderUnavailable {
            provider: "failing-stub".to_string(),
        }
        .into())
    }

    fn embed_batch(&self, _texts: &[String]) -> VibesResult<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(EmbeddingError::ProviderUnavailable {
            provider: "failing-stub".to_string(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "failing-stub"
    }

    fn is_available(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// A scripted reply. `None` means the call fails.
#[derive(Debug, Clone)]
pub struct Reply(Option<String>);

impl Reply {
    pub fn text(text: &str) -> Self {
        Self(Some(text.to_string()))
    }

    pub fn fail() -> Self {
        Self(None)
    }
}

/// Generator returning canned responses.
///
/// Rules are checked in order against the prompt; the first whose needle
/// appears in the prompt answers. Otherwise the default reply is used.
pub struct ScriptedGenerator {
    rules: Vec<(String, Reply)>,
    default: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// Always answer `text`.
    pub fn fixed(text: &str) -> Self {
        Self::with_rules(Vec::new(), Reply::text(text))
    }

    /// Every call fails.
    pub fn failing() -> Self {
        Self::with_rules(Vec::new(), Reply::fail())
    }

    /// Answer by prompt substring, falling back to `default`.
    pub fn with_rules(rules: Vec<(&str, Reply)>, default: Reply) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|(needle, reply)| (needle.to_string(), reply))
                .collect(),
            default,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in arrival order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl IGenerationProvider for ScriptedGenerator {
    fn generate(
        &self,
        prompt: &str,
        _max_output_tokens: u32,
        _temperature: f32,
    ) -> VibesResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let reply = self
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, reply)| reply)
            .unwrap_or(&self.default);
        match &reply.0 {
            Some(text) => Ok(text.clone()),
            None => Err(GenerationError::RequestFailed {
                reason: "scripted failure".to_string(),
            }
            .into()),
        }
    }

    fn name(&self) -> &str {
        "scripted-stub"
    }

    fn is_available(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Masker
// ---------------------------------------------------------------------------

/// Masker that never finds anything.
pub struct NoProfanity;

impl IProfanityMasker for NoProfanity {
    fn contains_profanity(&self, _text: &str) -> bool {
        false
    }

    fn mask(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Topic groups matching the `shooter.json` corpus.
pub const SHOOTER_TOPICS: &[&[&str]] = &[
    &["map"],
    &["weapon", "gun"],
    &["soundtrack", "music"],
    &["community"],
    &["graphics", "art style"],
    &["bots", "cheater", "hacker"],
    &["server", "netcode", "lag"],
    &["update", "developers"],
];
