use serde::{Deserialize, Serialize};

use super::defaults;

/// Sentence extraction bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Minimum sentence length in characters (inclusive).
    pub min_chars: usize,
    /// Maximum sentence length in characters (inclusive).
    pub max_chars: usize,
    /// Minimum number of spaces, i.e. tokens minus one.
    pub min_spaces: usize,
    /// Minimum share of alphabetic characters that must be ASCII letters.
    pub min_ascii_letter_ratio: f64,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_chars: defaults::DEFAULT_MIN_SENTENCE_CHARS,
            max_chars: defaults::DEFAULT_MAX_SENTENCE_CHARS,
            min_spaces: defaults::DEFAULT_MIN_SENTENCE_SPACES,
            min_ascii_letter_ratio: defaults::DEFAULT_MIN_ASCII_LETTER_RATIO,
        }
    }
}
