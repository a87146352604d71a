//! Free-text query enhancement.
//!
//! [`enhance`] turns a raw query string into an [`EnhancedQuery`]: the
//! lower-cased original, its whitespace tokens, and the skill and location
//! terms those tokens expand to through the static lexicons. Enhancement is
//! pure and deterministic; the same raw string always yields the same
//! expansion until the process restarts.

use serde::Serialize;

use crate::lexicon;

/// A query expanded with synonym and location terms.
///
/// Immutable once built; every downstream consumer works from the same
/// expansion. All term lists are deduplicated and keep first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedQuery {
    /// The raw query, trimmed and lower-cased.
    pub original_query: String,

    /// Query tokens plus every skill-synonym expansion.
    pub expanded_terms: Vec<String>,

    /// Tokens recognized as skills, with their full equivalence classes.
    pub skill_terms: Vec<String>,

    /// Location classes for tokens recognized as places or aliases.
    pub location_terms: Vec<String>,
}

impl EnhancedQuery {
    /// Whether enhancement produced anything to match against.
    pub fn is_empty(&self) -> bool {
        self.original_query.is_empty()
    }

    /// Skill terms joined with spaces, ready for the text matcher.
    pub fn joined_skill_terms(&self) -> String {
        self.skill_terms.join(" ")
    }

    /// Expanded terms joined with spaces, ready for the text matcher.
    pub fn joined_expanded_terms(&self) -> String {
        self.expanded_terms.join(" ")
    }
}

/// Expand a raw query against the static skill and location lexicons.
pub fn enhance(raw: &str) -> EnhancedQuery {
    let original_query = raw.trim().to_lowercase();
    if original_query.is_empty() {
        return EnhancedQuery::default();
    }

    let mut expanded_terms = Vec::new();
    let mut skill_terms = Vec::new();
    let mut location_terms = Vec::new();

    for token in original_query.split_whitespace() {
        push_unique(&mut expanded_terms, token);

        let skill_class = lexicon::skills().expand(token);
        if !skill_class.is_empty() {
            push_unique(&mut skill_terms, token);
            for member in &skill_class {
                push_unique(&mut skill_terms, member);
                push_unique(&mut expanded_terms, member);
            }
        }

        for place in lexicon::locations().expand(token) {
            push_unique(&mut location_terms, &place);
        }
    }

    EnhancedQuery {
        original_query,
        expanded_terms,
        skill_terms,
        location_terms,
    }
}

fn push_unique(terms: &mut Vec<String>, term: &str) {
    if !terms.iter().any(|t| t == term) {
        terms.push(term.to_string());
    }
}
