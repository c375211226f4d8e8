//! Sentence segmentation for per-sentence LLM processing

/// Split an article into candidate sentences
///
/// Splits on the literal `". "` delimiter, trims each piece, and drops blank
/// pieces. The iterator is lazy and can be restarted by calling again on the
/// same input.
///
/// This is a naive heuristic, not sentence-boundary detection: abbreviations
/// and quoted periods will split wrong. For per-sentence vocabulary prompts
/// that is acceptable; a misdrawn boundary costs at most one odd prompt.
pub fn sentences(article: &str) -> impl Iterator<Item = &str> {
    article
        .split(". ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(article: &str) -> Vec<&str> {
        sentences(article).collect()
    }

    #[test]
    fn test_splits_on_period_space() {
        assert_eq!(collect("A. B. C."), vec!["A", "B", "C."]);
    }

    #[test]
    fn test_no_delimiter_yields_single_sentence() {
        assert_eq!(collect("En enda mening utan punkt"), vec!["En enda mening utan punkt"]);
    }

    #[test]
    fn test_whitespace_only_yields_nothing() {
        assert!(collect("   \n\t  ").is_empty());
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_blank_segments_dropped() {
        // Consecutive delimiters produce empty pieces that must not be yielded
        assert_eq!(collect("A. . B. "), vec!["A", "B"]);
    }

    #[test]
    fn test_pieces_are_trimmed() {
        assert_eq!(collect("  Hej världen. Andra meningen.  "), vec!["Hej världen", "Andra meningen."]);
    }

    #[test]
    fn test_restartable() {
        let article = "A. B. C.";
        let first: Vec<&str> = sentences(article).collect();
        let second: Vec<&str> = sentences(article).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_period_without_space_not_a_boundary() {
        // The period inside "t.ex" is not followed by a space and does not
        // split; the one before " katter" does
        assert_eq!(collect("Det gäller t.ex. katter. Och hundar."), vec!["Det gäller t.ex", "katter", "Och hundar."]);
    }
}
