//! Split cleaned review text into sentences.

/// Split at `.`, `!` or `?` followed by whitespace.
/// The punctuation stays with its sentence; empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);

        let is_terminal = matches!(c, '.' | '!' | '?');
        let next_is_space = chars.peek().is_some_and(|n| n.is_whitespace());
        if is_terminal && next_is_space {
            push_trimmed(&mut sentences, &current);
            current.clear();
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
        }
    }

    // Remaining text that didn't end at a boundary.
    push_trimmed(&mut sentences, &current);
    sentences
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
