/// Profanity detection and masking.
pub trait IProfanityMasker: Send + Sync {
    /// Whether `text` contains any masked term.
    fn contains_profanity(&self, text: &str) -> bool;

    /// Replace every masked term with mask glyphs.
    fn mask(&self, text: &str) -> String;
}
