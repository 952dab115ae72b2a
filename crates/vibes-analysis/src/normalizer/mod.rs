//! Review text → English opinion sentences.
//!
//! Per review: clean markup, drop non-English text, mask profanity, split
//! on sentence punctuation, then keep sentences that pass the length,
//! URL, language and opinion filters. Output keeps input order.

pub mod clean;
pub mod language;
pub mod opinion;
pub mod sentence_splitter;

use std::sync::LazyLock;

use regex::Regex;
use vibes_core::config::NormalizerConfig;
use vibes_core::traits::IProfanityMasker;
use vibes_core::Lexicon;

pub use clean::clean_text;
pub use language::is_english;
pub use opinion::is_opinion_sentence;
pub use sentence_splitter::split_sentences;

static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://").expect("valid regex"));

/// Extract opinion sentences from a bucket of reviews.
pub fn extract_sentences(
    reviews: &[String],
    masker: &dyn IProfanityMasker,
    lexicon: &Lexicon,
    settings: &NormalizerConfig,
) -> Vec<String> {
    let mut sentences = Vec::new();

    for review in reviews {
        let mut text = clean_text(review);
        if text.is_empty() {
            continue;
        }
        if !is_english(&text, settings.min_ascii_letter_ratio) {
            continue;
        }
        if masker.contains_profanity(&text) {
            text = clean::strip_mask_residue(&masker.mask(&text));
        }

        sentences.extend(
            split_sentences(&text)
                .into_iter()
                .filter(|s| keep_sentence(s, lexicon, settings)),
        );
    }

    sentences
}

/// Structural and semantic filters for a single candidate sentence.
pub fn keep_sentence(sentence: &str, lexicon: &Lexicon, settings: &NormalizerConfig) -> bool {
    let chars = sentence.chars().count();
    if chars < settings.min_chars || chars > settings.max_chars {
        return false;
    }
    if sentence.matches(' ').count() < settings.min_spaces {
        return false;
    }
    if URL.is_match(sentence) {
        return false;
    }
    is_english(sentence, settings.min_ascii_letter_ratio) && is_opinion_sentence(sentence, lexicon)
}
