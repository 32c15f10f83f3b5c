//! Degraded summarizer for callers that cannot reach the full pipeline.
//!
//! No scoring: split on `". "` and keep the leading pieces.

use super::{FALLBACK_SUMMARY, LengthPreset, target_count};

/// Take the first `target_count(preset, n)` raw `". "`-separated pieces.
///
/// ```
/// use notesum::summarizer::{fallback_summarize, LengthPreset};
///
/// let text = "One thing. Two things. Three things. Four things";
/// assert_eq!(fallback_summarize(text, LengthPreset::Medium), "One thing.");
/// ```
#[must_use]
pub fn fallback_summarize(text: &str, preset: LengthPreset) -> String {
    let pieces: Vec<&str> = text
        .split(". ")
        .filter(|piece| !piece.trim().is_empty())
        .collect();

    if pieces.is_empty() {
        return FALLBACK_SUMMARY.to_string();
    }

    let target = target_count(preset, pieces.len());
    let mut summary = pieces[..target].join(". ");
    if !summary.ends_with(&['.', '!', '?'][..]) {
        summary.push('.');
    }
    summary
}
