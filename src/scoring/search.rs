//! Query-mode relevance scoring.

use chrono::{DateTime, Utc};

use crate::data::JobListing;
use crate::engine::filter::SearchFilters;
use crate::matcher;
use crate::query::EnhancedQuery;
use crate::scoring::MAX_MATCH_REASONS;

/// Title relevance against the raw query.
const TITLE_QUERY_WEIGHT: f64 = 0.40;
/// Title relevance against the expanded skill terms.
const TITLE_SKILLS_WEIGHT: f64 = 0.30;
/// Description relevance against the raw query.
const DESCRIPTION_QUERY_WEIGHT: f64 = 0.20;
/// Description relevance against all expanded terms.
const DESCRIPTION_EXPANDED_WEIGHT: f64 = 0.15;
/// Tag relevance against the expanded skill terms.
const TAGS_SKILLS_WEIGHT: f64 = 0.25;
/// Flat bonus when a location term matches the job's location.
const LOCATION_BONUS: f64 = 0.20;
/// Flat bonus when the category filter matches the job's category.
const CATEGORY_BONUS: f64 = 0.15;
/// Weight of the linear recency boost.
const RECENCY_WEIGHT: f64 = 0.10;
/// Postings older than this many days get no recency boost.
const RECENCY_WINDOW_DAYS: f64 = 30.0;
/// Title relevance needed before the title reason is attached.
const TITLE_REASON_THRESHOLD: f64 = 0.3;

/// Minimum clamped score for a job to enter the result set.
pub const SEARCH_SCORE_THRESHOLD: f64 = 0.1;

/// Query-mode relevance of one job, clamped to [0, 1].
///
/// The signal weights sum above 1.0; the final clamp defines the ceiling of
/// the scale, so a posting does not need every signal to reach the top.
pub fn score_job(
    job: &JobListing,
    query: &EnhancedQuery,
    filters: &SearchFilters,
    now: DateTime<Utc>,
) -> f64 {
    let mut score = 0.0;

    // 1. Text relevance, strongest on the title.
    score += TITLE_QUERY_WEIGHT * matcher::score(&job.title, &query.original_query);
    score += TITLE_SKILLS_WEIGHT * matcher::score(&job.title, &query.joined_skill_terms());
    score += DESCRIPTION_QUERY_WEIGHT * matcher::score(&job.description, &query.original_query);
    score +=
        DESCRIPTION_EXPANDED_WEIGHT * matcher::score(&job.description, &query.joined_expanded_terms());
    score += TAGS_SKILLS_WEIGHT * matcher::score(&job.tags, &query.joined_skill_terms());

    // 2. Flat bonuses for location and category.
    if location_matches(job, query) {
        score += LOCATION_BONUS;
    }
    if category_matches(job, filters) {
        score += CATEGORY_BONUS;
    }

    // 3. Linear recency boost over the freshness window.
    score += recency_bonus(job, now);

    score.clamp(0.0, 1.0)
}

/// Up to three human-readable explanations for a search hit, in fixed
/// priority order: title relevance, skill terms, category.
pub fn match_reasons(job: &JobListing, query: &EnhancedQuery, filters: &SearchFilters) -> Vec<String> {
    let mut reasons = Vec::new();

    if matcher::score(&job.title, &query.original_query) > TITLE_REASON_THRESHOLD {
        reasons.push(format!("Title matches \"{}\"", query.original_query));
    }

    let description = job.description.to_lowercase();
    let tags = job.tags.to_lowercase();
    for skill in &query.skill_terms {
        if reasons.len() >= MAX_MATCH_REASONS {
            break;
        }
        if description.contains(skill.as_str()) || tags.contains(skill.as_str()) {
            reasons.push(format!("Requires {skill}"));
        }
    }

    if reasons.len() < MAX_MATCH_REASONS && category_matches(job, filters) {
        reasons.push(format!("{} category", job.category));
    }

    reasons.truncate(MAX_MATCH_REASONS);
    reasons
}

fn location_matches(job: &JobListing, query: &EnhancedQuery) -> bool {
    if query.location_terms.is_empty() || job.location.is_empty() {
        return false;
    }
    let location = job.location.to_lowercase();
    query
        .location_terms
        .iter()
        .any(|term| location.contains(term.as_str()))
}

fn category_matches(job: &JobListing, filters: &SearchFilters) -> bool {
    filters
        .category
        .as_deref()
        .is_some_and(|category| category == job.category)
}

/// Linear boost for postings created inside the freshness window.
fn recency_bonus(job: &JobListing, now: DateTime<Utc>) -> f64 {
    let days = job.days_since_created(now);
    ((RECENCY_WINDOW_DAYS - days) / RECENCY_WINDOW_DAYS).max(0.0) * RECENCY_WEIGHT
}
