//! Query refinement suggestions and autocomplete.
//!
//! Both are best-effort conveniences layered on top of search: refinement
//! mines the top results for skills the query missed, autocomplete completes
//! a partial token from posting text and the skill lexicon. Neither performs
//! scoring of its own.

use ahash::AHashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::data::{JobListing, ScoredJob};
use crate::lexicon;

/// Number of top results mined for refinement terms.
const SUGGESTION_SOURCE_RESULTS: usize = 10;

/// Maximum refinement suggestions attached to one search response.
const MAX_SUGGESTIONS: usize = 3;

/// Propose refined queries from canonical skills present in the top results
/// but absent from the original query.
///
/// Results are assumed ranked best-first; only the top ten are mined. Each
/// suggestion is the original query with one canonical skill appended, and a
/// skill already present in the query (as a substring) is never proposed.
pub fn refine_query(original_query: &str, results: &[ScoredJob]) -> Vec<String> {
    if original_query.is_empty() || results.is_empty() {
        return Vec::new();
    }

    let query = original_query.to_lowercase();
    let mut seen = AHashSet::new();
    let mut suggestions = Vec::new();

    for scored in results.iter().take(SUGGESTION_SOURCE_RESULTS) {
        let text = scored.job.combined_text();
        for canonical in lexicon::skills().scan_canonicals(&text) {
            if query.contains(canonical) || !seen.insert(canonical) {
                continue;
            }
            suggestions.push(format!("{query} {canonical}"));
            if suggestions.len() >= MAX_SUGGESTIONS {
                return suggestions;
            }
        }
    }

    suggestions
}

/// Complete a partial query token from posting text and the skill lexicon.
///
/// Scans the tokens of every posting's title, description, and tags, then
/// the lexicon's canonical skill terms, keeping candidates that contain the
/// partial input as a substring. First-seen order, deduplicated, capped at
/// `limit`.
pub fn autocomplete(jobs: &[JobListing], partial: &str, limit: usize) -> Vec<String> {
    let partial = partial.trim().to_lowercase();
    if partial.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut seen = AHashSet::new();
    let mut suggestions = Vec::new();

    for job in jobs {
        for source in [&job.title, &job.description, &job.tags] {
            for token in source.unicode_words() {
                let token = token.to_lowercase();
                if token.contains(partial.as_str()) && seen.insert(token.clone()) {
                    suggestions.push(token);
                    if suggestions.len() >= limit {
                        return suggestions;
                    }
                }
            }
        }
    }

    for canonical in lexicon::skills().canonical_terms() {
        if canonical.contains(partial.as_str()) && seen.insert(canonical.to_string()) {
            suggestions.push(canonical.to_string());
            if suggestions.len() >= limit {
                return suggestions;
            }
        }
    }

    suggestions
}
