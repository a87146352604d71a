//! Term-to-text match scoring.
//!
//! Scores how well a block of text satisfies a set of query terms. Each term
//! earns a tiered award: exact substring beats synonym, synonym beats fuzzy.
//! The result is the mean award over all terms, always in [0, 1].

use crate::lexicon;
use crate::util::levenshtein::normalized_distance;

/// Award for a verbatim (case-insensitive) substring match.
const EXACT_AWARD: f64 = 1.0;
/// Award when only a synonym of the term appears.
const SYNONYM_AWARD: f64 = 0.8;
/// Award for an edit-distance match.
const FUZZY_AWARD: f64 = 0.6;
/// Normalized edit distance must stay below this for the fuzzy award.
const FUZZY_THRESHOLD: f64 = 0.3;

/// Score how well `text` satisfies the whitespace-separated `terms`.
///
/// Empty text or an empty term set scores 0.0. The fuzzy tier compares a
/// term against the entire text, not per token; the distance grows with the
/// length difference, so it only fires when the text is roughly as short as
/// the term. That keeps typo tolerance on titles and short fields without
/// letting long descriptions match everything.
pub fn score(text: &str, terms: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let words: Vec<&str> = terms.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let haystack = text.to_lowercase();
    let total: f64 = words
        .iter()
        .map(|word| word_award(&haystack, &word.to_lowercase()))
        .sum();

    total / words.len() as f64
}

/// Best single-tier award for one term against lower-cased text.
fn word_award(haystack: &str, word: &str) -> f64 {
    if haystack.contains(word) {
        return EXACT_AWARD;
    }
    if lexicon::skills()
        .expand(word)
        .iter()
        .any(|synonym| haystack.contains(synonym.as_str()))
    {
        return SYNONYM_AWARD;
    }
    if fuzzy_matches(haystack, word) {
        return FUZZY_AWARD;
    }
    0.0
}

fn fuzzy_matches(haystack: &str, word: &str) -> bool {
    let word_len = word.chars().count();
    if word_len == 0 {
        return false;
    }

    // The distance is at least the length difference, so a text much longer
    // than the term can never cross the threshold. Skip the DP table then.
    let hay_len = haystack.chars().count();
    let lower_bound = hay_len.abs_diff(word_len);
    if lower_bound as f64 / word_len as f64 >= FUZZY_THRESHOLD {
        return false;
    }

    normalized_distance(word, haystack) < FUZZY_THRESHOLD
}
