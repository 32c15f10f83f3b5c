use super::Sentence;
use crate::utils::text::terminal_fragments;

/// Fragments shorter than this many characters are dropped.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Split normalized text into qualifying sentences.
///
/// Splits on runs of `.`, `!` and `?`, trims each fragment and keeps those with
/// at least [`MIN_SENTENCE_CHARS`] characters. `index` is the position among
/// the survivors.
#[must_use]
pub fn segment(normalized: &str) -> Vec<Sentence> {
    terminal_fragments(normalized)
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() >= MIN_SENTENCE_CHARS)
        .enumerate()
        .map(|(index, fragment)| Sentence::new(fragment, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_short_fragments_and_reindexes_survivors() {
        let sentences = segment("Yes. The meeting ran long today!! Ok? Budget numbers were final.");
        let texts: Vec<&str> = sentences.iter().map(Sentence::text).collect();
        assert_eq!(
            texts,
            vec!["The meeting ran long today", "Budget numbers were final"]
        );
        assert_eq!(sentences[0].index(), 0);
        assert_eq!(sentences[1].index(), 1);
    }

    #[test]
    fn length_filter_counts_characters_not_bytes() {
        // 9 characters, 18 bytes.
        let sentences = segment("ééééééééé. ééééééééééé.");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text(), "ééééééééééé");
    }

    #[test]
    fn ten_characters_is_enough() {
        let sentences = segment("abcdefghij. abcdefghi.");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text(), "abcdefghij");
    }

    #[test]
    fn text_without_terminal_punctuation_is_one_fragment() {
        let sentences = segment("no punctuation anywhere in here");
        assert_eq!(sentences.len(), 1);
    }
}
