//! Default profanity masker backed by the lexicon word list.

use std::collections::HashSet;

use vibes_core::traits::IProfanityMasker;
use vibes_core::Lexicon;

const MASK: &str = "****";

/// Case-insensitive whole-word masker.
pub struct WordListMasker {
    words: HashSet<String>,
}

impl WordListMasker {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self::new(&lexicon.profanity)
    }

    fn is_listed(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

/// Split `text` into alternating word / non-word runs.
fn runs(text: &str) -> impl Iterator<Item = (bool, &str)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_word = is_word_char(first);
        let end = rest
            .char_indices()
            .find(|(_, c)| is_word_char(*c) != is_word)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some((is_word, run))
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl IProfanityMasker for WordListMasker {
    fn contains_profanity(&self, text: &str) -> bool {
        runs(text).any(|(is_word, run)| is_word && self.is_listed(run))
    }

    fn mask(&self, text: &str) -> String {
        runs(text)
            .map(|(is_word, run)| {
                if is_word && self.is_listed(run) {
                    MASK
                } else {
                    run
                }
            })
            .collect()
    }
}
