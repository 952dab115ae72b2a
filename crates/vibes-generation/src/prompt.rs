//! Prompt construction for a single cluster.

use vibes_core::models::Polarity;

/// Keyword string used when a cluster has no distinctive terms.
pub const GENERAL_TOPIC: &str = "general";

/// Build the phrase prompt from the first `sample_sentences` sentences and
/// the first `sample_keywords` keywords.
pub fn build_prompt(
    sentences: &[String],
    keywords: &[String],
    polarity: Polarity,
    sample_sentences: usize,
    sample_keywords: usize,
) -> String {
    let sample: Vec<&str> = sentences
        .iter()
        .take(sample_sentences)
        .map(String::as_str)
        .collect();
    let keyword_str = if keywords.is_empty() {
        GENERAL_TOPIC.to_string()
    } else {
        keywords
            .iter()
            .take(sample_keywords)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let sentiment = polarity.as_str();

    format!(
        "These {sentiment} game reviews mention: {keyword_str}\n\
         Reviews: {reviews}\n\n\
         Respond with ONLY a single short phrase (under 8 words) summarizing the {sentiment} \
         sentiment about {keyword_str}. \
         Rules: ONE phrase only. No dashes, no bullet points, no lists, no quotes, no explanation. \
         Must name a specific game aspect (e.g. combat, story, graphics, music, maps, UI, performance). \
         NEVER use vague phrases like 'enjoy the game', 'recommend', 'not worth it', or 'waste of time'. \
         Do NOT start with 'The game' or 'Players'. No period at the end.",
        reviews = sample.join(" | "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn samples_are_truncated() {
        let sentences: Vec<String> = (0..12).map(|i| format!("sentence number {i}")).collect();
        let keywords = owned(&["maps", "flanking", "routes", "sightlines"]);
        let prompt = build_prompt(&sentences, &keywords, Polarity::Positive, 8, 3);
        assert!(prompt.contains("sentence number 7"));
        assert!(!prompt.contains("sentence number 8"));
        assert!(prompt.contains("mention: maps, flanking, routes\n"));
        assert!(!prompt.contains("sightlines"));
        assert!(prompt.contains("sentence number 0 | sentence number 1"));
    }

    #[test]
    fn empty_keywords_use_general() {
        let prompt = build_prompt(&owned(&["a b c d"]), &[], Polarity::Negative, 8, 3);
        assert!(prompt.starts_with("These negative game reviews mention: general\n"));
        assert!(prompt.contains("about general."));
    }

    #[test]
    fn prompt_carries_constraints() {
        let prompt = build_prompt(&owned(&["x"]), &owned(&["music"]), Polarity::Positive, 8, 3);
        assert!(prompt.contains("under 8 words"));
        assert!(prompt.contains("No period at the end."));
        assert!(prompt.contains("'The game' or 'Players'"));
    }
}
