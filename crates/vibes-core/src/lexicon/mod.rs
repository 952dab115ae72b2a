//! Word lists driving the opinion, topic and phrase-quality heuristics.
//!
//! All matching against these lists is done on lowercased text, so entries
//! are stored lowercase.

pub mod defaults;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Plain-data lexicon. Loadable from a `[lexicon]` table in the main
/// config or from a standalone TOML file with the same keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub anecdote_openers: Vec<String>,
    pub opinion_terms: Vec<String>,
    pub english_stopwords: Vec<String>,
    pub domain_stopwords: Vec<String>,
    pub vague_phrases: Vec<String>,
    pub negative_signals: Vec<String>,
    pub positive_signals: Vec<String>,
    pub profanity: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            anecdote_openers: owned(defaults::ANECDOTE_OPENERS),
            opinion_terms: owned(defaults::OPINION_TERMS),
            english_stopwords: owned(defaults::ENGLISH_STOPWORDS),
            domain_stopwords: owned(defaults::DOMAIN_STOPWORDS),
            vague_phrases: owned(defaults::VAGUE_PHRASES),
            negative_signals: owned(defaults::NEGATIVE_SIGNALS),
            positive_signals: owned(defaults::POSITIVE_SIGNALS),
            profanity: owned(defaults::PROFANITY),
        }
    }
}

impl Lexicon {
    /// Parse a standalone lexicon TOML. Missing lists keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let lexicon: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Ok(lexicon.lowercased())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let lexicon: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(lexicon.lowercased())
    }

    /// Union of the English and domain stop words.
    pub fn stop_words(&self) -> HashSet<&str> {
        self.english_stopwords
            .iter()
            .chain(self.domain_stopwords.iter())
            .map(String::as_str)
            .collect()
    }

    /// True if `lowered` starts with any anecdote opener.
    pub fn is_anecdote(&self, lowered: &str) -> bool {
        self.anecdote_openers
            .iter()
            .any(|opener| lowered.starts_with(opener.as_str()))
    }

    pub fn mentions_opinion(&self, lowered: &str) -> bool {
        contains_any(&self.opinion_terms, lowered)
    }

    pub fn is_vague(&self, lowered: &str) -> bool {
        contains_any(&self.vague_phrases, lowered)
    }

    /// Distinct negative signals present in `lowered`.
    pub fn negative_hits(&self, lowered: &str) -> usize {
        count_distinct(&self.negative_signals, lowered)
    }

    /// Distinct positive signals present in `lowered`.
    pub fn positive_hits(&self, lowered: &str) -> usize {
        count_distinct(&self.positive_signals, lowered)
    }

    pub(crate) fn lowercased(mut self) -> Self {
        for list in [
            &mut self.anecdote_openers,
            &mut self.opinion_terms,
            &mut self.english_stopwords,
            &mut self.domain_stopwords,
            &mut self.vague_phrases,
            &mut self.negative_signals,
            &mut self.positive_signals,
            &mut self.profanity,
        ] {
            for entry in list.iter_mut() {
                *entry = entry.to_lowercase();
            }
        }
        self
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn contains_any(terms: &[String], lowered: &str) -> bool {
    terms.iter().any(|t| lowered.contains(t.as_str()))
}

fn count_distinct(terms: &[String], lowered: &str) -> usize {
    terms
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|t| lowered.contains(t))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_cover_both_lists() {
        let lex = Lexicon::default();
        let stops = lex.stop_words();
        assert!(stops.contains("the"));
        assert!(!stops.contains("gameplay"));
        assert!(stops.contains("players"));
    }

    #[test]
    fn anecdote_opener_is_prefix_match() {
        let lex = Lexicon::default();
        assert!(lex.is_anecdote("i remember playing this as a kid"));
        assert!(!lex.is_anecdote("honestly i remember nothing good"));
    }

    #[test]
    fn signal_counts_are_distinct() {
        let lex = Lexicon::default();
        assert_eq!(lex.negative_hits("bug bug bug"), 1);
        assert_eq!(lex.positive_hits("smooth and polished"), 2);
    }

    #[test]
    fn standalone_toml_overrides_one_list() {
        let lex = Lexicon::from_toml("vague_phrases = [\"Meh\"]").unwrap();
        assert_eq!(lex.vague_phrases, vec!["meh".to_string()]);
        assert_eq!(lex.opinion_terms, Lexicon::default().opinion_terms);
    }
}
