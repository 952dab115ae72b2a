/// True if ASCII letters make up at least `min_ratio` of all letters.
/// Text without letters is not English.
pub fn is_english(text: &str, min_ratio: f64) -> bool {
    let (ascii, total) = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(ascii, total), c| {
            (ascii + usize::from(c.is_ascii_alphabetic()), total + 1)
        });
    if total == 0 {
        return false;
    }
    ascii as f64 / total as f64 >= min_ratio
}
