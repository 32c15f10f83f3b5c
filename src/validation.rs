//! Input checks for the summarize endpoint and the advisory content validator.

use serde_json::Value;

use crate::core::models::{ValidationMetadata, ValidationReport};
use crate::errors::InputError;
use crate::utils::text::{count_words, split_sentences_loose};

/// Content with fewer words is rejected by the validator.
pub const MIN_WORDS: usize = 10;

/// Content with more words gets a "consider splitting" suggestion.
pub const LONG_CONTENT_WORDS: usize = 10_000;

pub const READING_WORDS_PER_MINUTE: usize = 200;

pub const TOO_SHORT_SUGGESTION: &str =
    "Content is too short. Please provide at least 10 words for meaningful summarization.";
pub const TOO_LONG_WORDS_SUGGESTION: &str =
    "Content is quite long. Consider breaking it into smaller sections for better summaries.";
pub const SINGLE_SENTENCE_SUGGESTION: &str =
    "Content appears to be a single sentence. Summaries work better with multiple sentences.";

/// Validate the `text` field of a summarize request.
///
/// The length limit counts characters of the untrimmed text.
pub fn check_summarize_text(value: Option<&Value>, max_chars: usize) -> Result<&str, InputError> {
    let text = match value {
        Some(Value::String(s)) => s.as_str(),
        Some(_) | None => return Err(InputError::InvalidType),
    };

    if text.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }

    let actual = text.chars().count();
    if actual > max_chars {
        return Err(InputError::TooLong {
            max: max_chars,
            actual,
        });
    }

    Ok(text)
}

/// Word, character and sentence counts plus suggestions for `content`.
#[must_use]
pub fn analyze_content(content: &str, max_chars: usize) -> ValidationReport {
    let trimmed = content.trim();
    let word_count = count_words(trimmed);
    let character_count = trimmed.chars().count();
    let sentence_count = split_sentences_loose(trimmed).len();

    let mut suggestions = Vec::new();
    let mut is_valid = true;

    if word_count < MIN_WORDS {
        is_valid = false;
        suggestions.push(TOO_SHORT_SUGGESTION.to_string());
    }

    if word_count > LONG_CONTENT_WORDS {
        suggestions.push(TOO_LONG_WORDS_SUGGESTION.to_string());
    }

    if character_count > max_chars {
        is_valid = false;
        suggestions.push(format!(
            "Content exceeds maximum length limit of {max_chars} characters."
        ));
    }

    if sentence_count < 2 {
        suggestions.push(SINGLE_SENTENCE_SUGGESTION.to_string());
    }

    let avg_words_per_sentence = if sentence_count == 0 {
        0
    } else {
        (word_count as f64 / sentence_count as f64).round() as usize
    };

    ValidationReport {
        is_valid,
        word_count,
        character_count,
        estimated_reading_time: word_count.div_ceil(READING_WORDS_PER_MINUTE),
        suggestions,
        metadata: ValidationMetadata {
            sentence_count,
            avg_words_per_sentence,
        },
    }
}
