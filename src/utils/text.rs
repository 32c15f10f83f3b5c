//! Word and sentence counting shared by the summarizer and the content validator.

use once_cell::sync::Lazy;
use regex::Regex;

static TERMINAL_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("static regex compile"));

/// Number of whitespace-separated, non-empty tokens in `text`.
///
/// ```
/// use notesum::utils::text::count_words;
///
/// assert_eq!(count_words("  one two\tthree\n"), 3);
/// assert_eq!(count_words("   "), 0);
/// ```
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits `text` on runs of `.`, `!` and `?`. Delimiters are consumed and
/// fragments are returned untrimmed, empty ones included.
pub fn terminal_fragments(text: &str) -> impl Iterator<Item = &str> + '_ {
    TERMINAL_PUNCT_RE.split(text)
}

/// Loose sentence split used for advisory counts: every non-blank fragment
/// counts, regardless of length.
#[must_use]
pub fn split_sentences_loose(text: &str) -> Vec<&str> {
    terminal_fragments(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_across_mixed_whitespace() {
        assert_eq!(count_words("alpha  beta\n\ngamma\tdelta"), 4);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn loose_split_keeps_short_fragments() {
        let parts = split_sentences_loose("Yes. No!! Maybe?...");
        assert_eq!(parts, vec!["Yes", " No", " Maybe"]);
    }

    #[test]
    fn terminal_fragments_keeps_trailing_empty_piece() {
        let parts: Vec<&str> = terminal_fragments("One. Two.").collect();
        assert_eq!(parts, vec!["One", " Two", ""]);
    }
}
