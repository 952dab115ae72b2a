use vibes_core::Lexicon;

/// Not an anecdote, and mentions at least one opinion term.
pub fn is_opinion_sentence(sentence: &str, lexicon: &Lexicon) -> bool {
    let lower = sentence.trim().to_lowercase();
    !lexicon.is_anecdote(&lower) && lexicon.mentions_opinion(&lower)
}
