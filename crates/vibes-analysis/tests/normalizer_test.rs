//! Sentence extraction against the fixture corpora, plus invariants.

use proptest::prelude::*;
use test_fixtures::{load_corpus, NoProfanity};
use vibes_analysis::normalizer::{extract_sentences, is_english};
use vibes_analysis::WordListMasker;
use vibes_core::config::NormalizerConfig;
use vibes_core::Lexicon;

fn extract(reviews: &[String]) -> Vec<String> {
    extract_sentences(
        reviews,
        &NoProfanity,
        &Lexicon::default(),
        &NormalizerConfig::default(),
    )
}

fn assert_sentence_invariants(s: &str) {
    let chars = s.chars().count();
    assert!((20..=150).contains(&chars), "length {chars}: {s:?}");
    assert!(s.matches(' ').count() >= 3, "too few spaces: {s:?}");
    assert!(!s.contains("http://") && !s.contains("https://"), "url: {s:?}");
    assert!(is_english(s, 0.8), "not english: {s:?}");
}

#[test]
fn noisy_corpus_keeps_only_clean_opinions() {
    let corpus = load_corpus("noisy.json");
    let sentences = extract(&corpus.positive);
    assert_eq!(
        sentences,
        vec![
            "The maps are great and the weapons feel amazing to use.",
            "The soundtrack is fantastic and the music never gets old.",
        ]
    );
}

#[test]
fn shooter_corpus_respects_invariants_and_order() {
    let corpus = load_corpus("shooter.json");
    let sentences = extract(&corpus.positive);
    assert!(!sentences.is_empty());
    for s in &sentences {
        assert_sentence_invariants(s);
    }
    assert!(sentences[0].starts_with("The maps are varied"));
}

#[test]
fn profanity_is_masked_and_residue_removed() {
    let masker = WordListMasker::new(["darn"]);
    let reviews = vec!["The darn maps are great and so well designed.".to_string()];
    let sentences = extract_sentences(
        &reviews,
        &masker,
        &Lexicon::default(),
        &NormalizerConfig::default(),
    );
    assert_eq!(sentences, vec!["The maps are great and so well designed."]);
}

#[test]
fn empty_input_yields_nothing() {
    assert!(extract(&[]).is_empty());
    assert!(extract(&["".to_string(), "  \n ".to_string()]).is_empty());
}

#[test]
fn non_english_review_is_dropped_whole() {
    let reviews = vec!["Игра отличная, карты супер. The maps are great and well designed.".to_string()];
    assert!(extract(&reviews).is_empty());
}

proptest! {
    #[test]
    fn extracted_sentences_always_satisfy_invariants(
        reviews in prop::collection::vec(
            prop::collection::vec(
                prop_oneof![
                    Just("the maps are great"),
                    Just("weapons"),
                    Just("I remember"),
                    Just("https://x.io"),
                    Just("<b>"),
                    Just("[i]"),
                    Just("ok."),
                    Just("fun!"),
                    Just("карты"),
                    Just("\n"),
                    Just("soundtrack?"),
                    Just("and"),
                ],
                0..30,
            )
            .prop_map(|parts| parts.join(" ")),
            0..6,
        )
    ) {
        for s in extract(&reviews) {
            assert_sentence_invariants(&s);
        }
    }

    #[test]
    fn extraction_is_deterministic(review in "[a-zA-Z .!?]{0,200}") {
        let reviews = vec![review];
        prop_assert_eq!(extract(&reviews), extract(&reviews));
    }
}
