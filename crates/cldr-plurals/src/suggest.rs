//! "Did you mean" suggestions for unknown locale ids.

use strsim::jaro_winkler;

use crate::types::LocaleId;

/// Minimum similarity for a candidate to be suggested at all.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Rank available locales by similarity to an unknown input.
///
/// Returns up to `limit` candidates above the similarity threshold, best
/// first; ties break alphabetically so output is stable.
pub fn suggest_locales(input: &str, available: &[LocaleId], limit: usize) -> Vec<LocaleId> {
    let mut scored: Vec<(f64, &LocaleId)> = available
        .iter()
        .map(|locale| (jaro_winkler(input, locale.as_str()), locale))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, locale)| locale.clone())
        .collect()
}
