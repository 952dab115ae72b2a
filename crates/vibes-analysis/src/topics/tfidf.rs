//! TF-IDF over cluster documents.
//!
//! Weighting: lowercase, tokens of two or more word characters, stop words
//! removed before building unigrams and bigrams, vocabulary capped to the
//! most frequent terms, raw counts times smooth idf
//! `ln((1 + n) / (1 + df)) + 1`, then L2 row normalization.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use vibes_core::errors::AnalysisError;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// Fitted TF-IDF model over a fixed set of documents.
#[derive(Debug, Clone)]
pub struct TopicModel {
    documents: Vec<String>,
    vocabulary: Vec<String>,
    /// Sparse L2-normalized rows: `(term index, weight)`.
    rows: Vec<Vec<(usize, f64)>>,
}

impl TopicModel {
    /// Fit on `documents`. Fails with `EmptyVocabulary` when no term survives
    /// stop-word removal.
    pub fn fit(
        documents: Vec<String>,
        stop_words: &HashSet<&str>,
        max_features: usize,
    ) -> Result<Self, AnalysisError> {
        let term_counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| count_terms(doc, stop_words))
            .collect();

        // Corpus-wide counts, alphabetical so equal counts keep a stable order.
        let mut corpus: BTreeMap<&str, usize> = BTreeMap::new();
        for counts in &term_counts {
            for (term, &c) in counts {
                *corpus.entry(term.as_str()).or_default() += c;
            }
        }
        if corpus.is_empty() {
            return Err(AnalysisError::EmptyVocabulary);
        }

        let mut ranked: Vec<(&str, usize)> = corpus.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(max_features.max(1));
        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();

        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let n = documents.len() as f64;
        let mut df = vec![0usize; vocabulary.len()];
        for counts in &term_counts {
            for term in counts.keys() {
                if let Some(&i) = index.get(term.as_str()) {
                    df[i] += 1;
                }
            }
        }
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = term_counts
            .iter()
            .map(|counts| {
                let mut row: Vec<(usize, f64)> = counts
                    .iter()
                    .filter_map(|(term, &c)| {
                        index.get(term.as_str()).map(|&i| (i, c as f64 * idf[i]))
                    })
                    .collect();
                let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, w) in &mut row {
                        *w /= norm;
                    }
                }
                row
            })
            .collect();

        Ok(Self {
            documents,
            vocabulary,
            rows,
        })
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Nonzero terms of document `doc`, by descending weight then alphabetically.
    pub fn top_terms(&self, doc: usize, limit: usize) -> Vec<(String, f64)> {
        let Some(row) = self.rows.get(doc) else {
            return Vec::new();
        };
        let mut scored: Vec<(&str, f64)> = row
            .iter()
            .filter(|(_, w)| *w > 0.0)
            .map(|&(i, w)| (self.vocabulary[i].as_str(), w))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(t, w)| (t.to_string(), w))
            .collect()
    }

    /// Keywords for the first document whose text equals `document`.
    pub fn keywords_for(&self, document: &str, limit: usize) -> Vec<String> {
        self.documents
            .iter()
            .position(|d| d == document)
            .map(|i| self.top_terms(i, limit).into_iter().map(|(t, _)| t).collect())
            .unwrap_or_default()
    }
}

/// Unigram and bigram counts for one document.
fn count_terms(doc: &str, stop_words: &HashSet<&str>) -> HashMap<String, usize> {
    let lower = doc.to_lowercase();
    let tokens: Vec<&str> = TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !stop_words.contains(t))
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for t in &tokens {
        *counts.entry((*t).to_string()).or_default() += 1;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bigrams_skip_removed_stop_words() {
        let stops: HashSet<&str> = ["the", "is"].into_iter().collect();
        let counts = count_terms("The music is loud", &stops);
        assert_eq!(counts.get("music loud"), Some(&1));
        assert!(!counts.contains_key("the"));
    }

    #[test]
    fn single_char_tokens_dropped() {
        let counts = count_terms("a b cd", &HashSet::new());
        assert_eq!(counts.len(), 1);
        assert!(counts.contains_key("cd"));
    }

    #[test]
    fn rows_are_unit_length() {
        let model = TopicModel::fit(
            docs(&["maps maps guns", "music guns"]),
            &HashSet::new(),
            200,
        )
        .unwrap();
        for doc in 0..2 {
            let norm: f64 = model.top_terms(doc, 100).iter().map(|(_, w)| w * w).sum();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn shared_terms_weigh_less() {
        let model =
            TopicModel::fit(docs(&["maps guns", "music guns"]), &HashSet::new(), 200).unwrap();
        let top = model.top_terms(0, 5);
        assert_eq!(top[0].0, "maps");
        let guns = top.iter().find(|(t, _)| t == "guns").map(|(_, w)| *w);
        assert!(guns.is_some_and(|w| w < top[0].1));
    }

    #[test]
    fn max_features_keeps_most_frequent() {
        let model = TopicModel::fit(
            docs(&["alpha beta alpha gamma alpha beta"]),
            &HashSet::new(),
            3,
        )
        .unwrap();
        // alpha=3, then "alpha beta"=2 and beta=2; gamma and the rest drop out.
        assert_eq!(model.vocabulary(), &["alpha", "alpha beta", "beta"]);
    }

    #[test]
    fn equal_weights_break_alphabetically() {
        let model = TopicModel::fit(docs(&["zeta beta"]), &HashSet::new(), 200).unwrap();
        let terms: Vec<String> = model.top_terms(0, 5).into_iter().map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["beta", "zeta", "zeta beta"]);
    }

    #[test]
    fn empty_vocabulary_is_error() {
        let stops: HashSet<&str> = ["the"].into_iter().collect();
        let err = TopicModel::fit(docs(&["the the", "a"]), &stops, 200).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyVocabulary));
    }
}
