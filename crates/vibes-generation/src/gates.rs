//! Lexical quality gates for generated phrases.

use std::fmt;

use serde::{Deserialize, Serialize};
use vibes_core::models::Polarity;
use vibes_core::Lexicon;

/// Why a phrase was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    Empty,
    /// Generic sentiment that names no aspect.
    Vague,
    /// Sentiment signals contradict the requested polarity.
    WrongPolarity,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Vague => "vague",
            Self::WrongPolarity => "wrong_polarity",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run every gate in order; the first failure wins.
pub fn check(phrase: &str, polarity: Polarity, lexicon: &Lexicon) -> Result<(), RejectionReason> {
    if phrase.trim().is_empty() {
        return Err(RejectionReason::Empty);
    }
    let lower = phrase.to_lowercase();
    if lexicon.is_vague(&lower) {
        return Err(RejectionReason::Vague);
    }
    if contradicts(&lower, polarity, lexicon) {
        return Err(RejectionReason::WrongPolarity);
    }
    Ok(())
}

/// Signals from the opposite side only, with none from the requested side.
fn contradicts(lower: &str, polarity: Polarity, lexicon: &Lexicon) -> bool {
    let neg = lexicon.negative_hits(lower);
    let pos = lexicon.positive_hits(lower);
    match polarity {
        Polarity::Positive => neg >= 1 && pos == 0,
        Polarity::Negative => pos >= 1 && neg == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vague_phrase_rejected() {
        let lex = Lexicon::default();
        assert_eq!(
            check("I love this game so much", Polarity::Positive, &lex),
            Err(RejectionReason::Vague)
        );
        assert_eq!(
            check("Would not recommend", Polarity::Negative, &lex),
            Err(RejectionReason::Vague)
        );
    }

    #[test]
    fn negative_phrase_rejected_as_praise() {
        let lex = Lexicon::default();
        assert_eq!(
            check("Buggy netcode ruins matches", Polarity::Positive, &lex),
            Err(RejectionReason::WrongPolarity)
        );
        assert_eq!(check("Buggy netcode ruins matches", Polarity::Negative, &lex), Ok(()));
    }

    #[test]
    fn positive_phrase_rejected_as_criticism() {
        let lex = Lexicon::default();
        assert_eq!(
            check("Stunning hand-painted maps", Polarity::Negative, &lex),
            Err(RejectionReason::WrongPolarity)
        );
    }

    #[test]
    fn mixed_signals_pass_both_ways() {
        let lex = Lexicon::default();
        let phrase = "Polished combat despite clunky menus";
        assert_eq!(check(phrase, Polarity::Positive, &lex), Ok(()));
        assert_eq!(check(phrase, Polarity::Negative, &lex), Ok(()));
    }

    #[test]
    fn neutral_phrase_passes() {
        let lex = Lexicon::default();
        assert_eq!(check("Weapon variety and unlocks", Polarity::Positive, &lex), Ok(()));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(
            check("  ", Polarity::Positive, &Lexicon::default()),
            Err(RejectionReason::Empty)
        );
    }
}
