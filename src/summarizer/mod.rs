//! Extractive summarization engine.
//!
//! The pipeline is strictly linear:
//! normalize -> segment -> score -> select/assemble.
//! Every stage is a pure function over in-memory values, so the engine can be
//! called concurrently from independent requests without coordination.

pub mod fallback;
pub mod normalize;
pub mod score;
pub mod segment;
pub mod select;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::utils::text::count_words;

pub use fallback::fallback_summarize;
pub use normalize::normalize;
pub use score::score;
pub use segment::segment;
pub use select::{assemble, select, target_count};

/// Returned when no sentence survives segmentation.
pub const FALLBACK_SUMMARY: &str = "Unable to generate summary from the provided text.";

/// Caller-selected knob controlling what fraction of sentences are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPreset {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthPreset {
    /// Lenient parse: anything other than `short` or `long` is `Medium`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Medium,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Fraction of sentences retained and the minimum number kept.
    #[must_use]
    pub fn policy(self) -> (f64, usize) {
        match self {
            Self::Short => (0.15, 1),
            Self::Medium => (0.25, 1),
            Self::Long => (0.4, 2),
        }
    }
}

impl fmt::Display for LengthPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A segmented sentence. Immutable once scored; `index` is its position among
/// the surviving fragments and the only key used to restore document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    text: String,
    index: usize,
    score: f64,
}

impl Sentence {
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
            score: 0.0,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub(crate) fn with_score(self, score: f64) -> Self {
        Self { score, ..self }
    }
}

/// Summary text plus the counts reported to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub summary: String,
    pub original_word_count: usize,
    pub summary_word_count: usize,
    pub compression_ratio: f64,
}

/// Produce an extractive summary of `text`.
///
/// Always returns a string: either the selected sentences in document order,
/// or [`FALLBACK_SUMMARY`] when nothing qualifies.
///
/// ```
/// use notesum::summarizer::{summarize, LengthPreset, FALLBACK_SUMMARY};
///
/// assert_eq!(summarize("Yes. No.", LengthPreset::Medium), FALLBACK_SUMMARY);
/// assert_eq!(
///     summarize("This is short.", LengthPreset::Medium),
///     "This is short."
/// );
/// ```
#[must_use]
pub fn summarize(text: &str, preset: LengthPreset) -> String {
    let normalized = normalize(text);
    let sentences = segment(&normalized);
    if sentences.is_empty() {
        debug!("No qualifying sentences; returning fallback summary");
        return FALLBACK_SUMMARY.to_string();
    }

    let candidates = sentences.len();
    let selected = select(score(sentences), preset);
    debug!(
        candidates,
        selected = selected.len(),
        preset = %preset,
        "Selected sentences for summary"
    );
    assemble(&selected)
}

/// Summarize and compute word counts and the compression ratio.
#[must_use]
pub fn summarize_with_stats(text: &str, preset: LengthPreset) -> SummaryReport {
    let summary = summarize(text, preset);
    let original_word_count = count_words(text);
    let summary_word_count = count_words(&summary);

    SummaryReport {
        compression_ratio: compression_ratio(summary_word_count, original_word_count),
        summary,
        original_word_count,
        summary_word_count,
    }
}

/// `summary / original`, rounded to two decimals. Zero when the original has
/// no words.
#[must_use]
pub fn compression_ratio(summary_words: usize, original_words: usize) -> f64 {
    if original_words == 0 {
        return 0.0;
    }
    let ratio = summary_words as f64 / original_words as f64;
    (ratio * 100.0).round() / 100.0
}
