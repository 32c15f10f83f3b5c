use super::{LengthPreset, Sentence};

/// Number of sentences kept for `preset` out of `sentence_count` candidates.
///
/// `max(floor, ceil(count * fraction))`, never more than `sentence_count`.
#[must_use]
pub fn target_count(preset: LengthPreset, sentence_count: usize) -> usize {
    let (fraction, floor) = preset.policy();
    let proportional = (sentence_count as f64 * fraction).ceil() as usize;
    proportional.max(floor).min(sentence_count)
}

/// Keep the best `target_count` sentences, returned in document order.
///
/// Ranking is by score descending with ties broken by original index, so the
/// same input always yields the same selection.
#[must_use]
pub fn select(mut scored: Vec<Sentence>, preset: LengthPreset) -> Vec<Sentence> {
    let target = target_count(preset, scored.len());

    scored.sort_by(|a, b| {
        b.score()
            .total_cmp(&a.score())
            .then_with(|| a.index().cmp(&b.index()))
    });
    scored.truncate(target);
    scored.sort_by_key(Sentence::index);
    scored
}

/// Join sentence texts with `". "` and make sure the result ends with
/// terminal punctuation.
#[must_use]
pub fn assemble(selected: &[Sentence]) -> String {
    let mut summary = selected
        .iter()
        .map(Sentence::text)
        .collect::<Vec<_>>()
        .join(". ");

    if !summary.ends_with(&['.', '!', '?'][..]) {
        summary.push('.');
    }
    summary
}
