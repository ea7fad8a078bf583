// ============================================================
// Layer 4 — Clause Extractor
// ============================================================
// Isolates the generated clause from a completion like
//
//   "The doctor examined the nurse because he was tired."
//
// The stimuli are built so that the text after the LAST
// occurrence of the separator word ("because") is the clause
// the model generated, and its first token is the pronoun we
// want. The source data used a positional trim here (drop the
// first and last character of the clause); that convention is
// replaced with an explicit policy:
//
//   1. keep the text after the last separator occurrence
//      (the whole sentence if the separator never appears)
//   2. strip leading whitespace
//   3. strip ONE trailing ASCII punctuation character if present
//   4. the pronoun is the first whitespace-delimited token,
//      or None if nothing remains
//
// No step can panic: a sentence with no separator, an empty
// clause, or a one-character clause degrades to None instead of
// indexing out of range.
//
// Reference: Rust Book §8 (Strings in Rust)

/// Extracts the trailing clause and its leading pronoun token.
pub struct ClauseExtractor {
    /// The word that introduces the generated clause,
    /// matched as a plain substring
    separator: String,
}

impl ClauseExtractor {
    /// Create a new ClauseExtractor for the given separator word
    pub fn new(separator: impl Into<String>) -> Self {
        Self { separator: separator.into() }
    }

    /// Return the trimmed clause after the LAST occurrence of the
    /// separator. When the separator is absent the whole sentence
    /// is treated as the clause.
    pub fn trailing_clause<'a>(&self, sentence: &'a str) -> &'a str {
        // rfind gives the byte offset of the LAST occurrence,
        // matching "keep only the text after the final separator"
        let after = match sentence.rfind(&self.separator) {
            Some(idx) => &sentence[idx + self.separator.len()..],
            None      => sentence,
        };

        let clause = after.trim_start();

        // Drop a single trailing ".", "!", "?" etc. — sentence-final
        // punctuation, not anything inside the clause
        clause
            .strip_suffix(|c: char| c.is_ascii_punctuation())
            .unwrap_or(clause)
    }

    /// Return the generated subject pronoun: the first
    /// whitespace-delimited token of the trailing clause.
    /// None when the clause has no tokens at all.
    pub fn generated_subject(&self, sentence: &str) -> Option<String> {
        self.trailing_clause(sentence)
            .split_whitespace()
            .next()
            .map(str::to_string)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ClauseExtractor {
        ClauseExtractor::new("because")
    }

    #[test]
    fn test_extracts_he_from_generated_clause() {
        let e = extractor();
        assert_eq!(
            e.generated_subject("The doctor examined the nurse because he was tired."),
            Some("he".to_string()),
        );
    }

    #[test]
    fn test_extracts_she_from_generated_clause() {
        let e = extractor();
        assert_eq!(
            e.generated_subject("The doctor examined the nurse because she was tired."),
            Some("she".to_string()),
        );
    }

    #[test]
    fn test_uses_last_separator_occurrence() {
        let e = extractor();
        // Two "because"s — only the clause after the second one counts
        let s = "He left because it rained because she asked him to.";
        assert_eq!(e.trailing_clause(s), "she asked him to");
        assert_eq!(e.generated_subject(s), Some("she".to_string()));
    }

    #[test]
    fn test_missing_separator_treats_whole_string_as_clause() {
        let e = extractor();
        assert_eq!(
            e.generated_subject("She smiled at everyone."),
            Some("She".to_string()),
        );
    }

    #[test]
    fn test_strips_one_trailing_punctuation_only() {
        let e = extractor();
        assert_eq!(e.trailing_clause("x because he was tired!"), "he was tired");
        // Only ONE trailing punctuation character comes off
        assert_eq!(e.trailing_clause("x because he was tired?!"), "he was tired?");
    }

    #[test]
    fn test_empty_clause_yields_none() {
        let e = extractor();
        // Separator at the very end — nothing follows it
        assert_eq!(e.generated_subject("He was late because"), None);
        assert_eq!(e.generated_subject(""), None);
    }

    #[test]
    fn test_one_character_clause_does_not_panic() {
        let e = extractor();
        // Shorter than the original's two-character positional trim
        assert_eq!(e.generated_subject("x because ."), None);
    }
}
