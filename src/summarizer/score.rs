//! Hand-tuned additive sentence scoring.
//!
//! A sentence's score is the raw sum of independent bonuses. Scores are not
//! normalized across sentences.

use std::ops::RangeInclusive;

use super::Sentence;
use crate::utils::text::count_words;

/// Added once to the first and to the last sentence.
pub const POSITION_BONUS: f64 = 2.0;

/// Added when the word count falls inside [`LENGTH_BONUS_WORDS`].
pub const LENGTH_BONUS: f64 = 1.0;
pub const LENGTH_BONUS_WORDS: RangeInclusive<usize> = 8..=25;

/// Added for every indicator phrase present in the sentence.
pub const KEYWORD_BONUS: f64 = 1.0;

/// Added when the sentence contains at least one digit.
pub const NUMERIC_BONUS: f64 = 0.5;

/// Matched case-insensitively as substrings. Overlapping entries each count.
pub const KEYWORD_INDICATORS: [&str; 17] = [
    "important",
    "significant",
    "key",
    "main",
    "primary",
    "essential",
    "conclusion",
    "result",
    "therefore",
    "however",
    "moreover",
    "furthermore",
    "in summary",
    "to conclude",
    "overall",
    "ultimately",
    "specifically",
];

/// Score of the sentence at `position` in a sequence of `total` sentences.
#[must_use]
pub fn score_sentence(text: &str, position: usize, total: usize) -> f64 {
    let mut score = 0.0;

    // A lone sentence is both first and last; it still gets one bonus.
    if position == 0 || position + 1 == total {
        score += POSITION_BONUS;
    }

    if LENGTH_BONUS_WORDS.contains(&count_words(text)) {
        score += LENGTH_BONUS;
    }

    score += keyword_hits(text) as f64 * KEYWORD_BONUS;

    if text.chars().any(|c| c.is_ascii_digit()) {
        score += NUMERIC_BONUS;
    }

    score
}

/// Number of distinct indicator phrases found in `text`.
#[must_use]
pub fn keyword_hits(text: &str) -> usize {
    let lowered = text.to_lowercase();
    KEYWORD_INDICATORS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count()
}

/// Attach a score to every sentence, preserving order.
#[must_use]
pub fn score(sentences: Vec<Sentence>) -> Vec<Sentence> {
    let total = sentences.len();
    sentences
        .into_iter()
        .enumerate()
        .map(|(position, sentence)| {
            let value = score_sentence(sentence.text(), position, total);
            sentence.with_score(value)
        })
        .collect()
}
