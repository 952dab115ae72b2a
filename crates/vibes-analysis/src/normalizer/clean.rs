use std::sync::LazyLock;

use regex::Regex;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[/?[a-zA-Z]+[^\]]*\]").expect("valid regex"));
static MASK_GLYPHS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[♥*]+").expect("valid regex"));

/// Strip HTML and bracket markup tags, then collapse whitespace.
pub fn clean_text(text: &str) -> String {
    let text = HTML_TAG.replace_all(text, "");
    let text = MARKUP_TAG.replace_all(&text, "");
    collapse_whitespace(&text)
}

/// Delete mask glyphs left by the profanity masker.
pub fn strip_mask_residue(text: &str) -> String {
    collapse_whitespace(&MASK_GLYPHS.replace_all(text, ""))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_html_and_markup() {
        assert_eq!(
            clean_text("<b>Great</b> [i]maps[/i] and [url=https://x.io]music[/url]<br/>"),
            "Great maps and music"
        );
    }

    #[test]
    fn keeps_non_tag_brackets() {
        assert_eq!(clean_text("rated [10/10] overall"), "rated [10/10] overall");
    }

    #[test]
    fn collapses_newlines_and_runs() {
        assert_eq!(clean_text("  one\n\ntwo\t three  "), "one two three");
    }

    #[test]
    fn residue_removal() {
        assert_eq!(strip_mask_residue("this **** game is ♥♥♥ great"), "this game is great");
    }
}
