//! Response envelopes for the engine entry points.
//!
//! Entry points never surface `Err` to callers. A failed request comes back
//! as an envelope with empty result collections and the failure message in
//! `error`; a successful one carries `error: None`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::{ScoredJob, UserProfile};
use crate::query::EnhancedQuery;

/// Envelope returned by `search_jobs`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Ranked results, best first.
    pub jobs: Vec<ScoredJob>,

    /// The enhanced form of the query that produced these results.
    pub query: EnhancedQuery,

    /// Number of jobs that crossed the inclusion threshold.
    pub total_results: usize,

    /// When the search ran.
    pub search_time: DateTime<Utc>,

    /// Query refinement suggestions mined from the top results.
    pub suggestions: Vec<String>,

    /// Failure message when the request could not be served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub(crate) fn ranked(
        jobs: Vec<ScoredJob>,
        query: EnhancedQuery,
        search_time: DateTime<Utc>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            total_results: jobs.len(),
            jobs,
            query,
            search_time,
            suggestions,
            error: None,
        }
    }

    pub(crate) fn failed(query: EnhancedQuery, message: String) -> Self {
        Self {
            jobs: Vec::new(),
            query,
            total_results: 0,
            search_time: Utc::now(),
            suggestions: Vec::new(),
            error: Some(message),
        }
    }

    /// Whether the request failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Envelope returned by `recommend_jobs`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// Ranked recommendations, best first.
    pub recommendations: Vec<ScoredJob>,

    /// The profile the recommendations were computed for.
    pub user_profile: UserProfile,

    /// When the recommendations were generated.
    pub generated_at: DateTime<Utc>,

    /// Number of open postings that were evaluated.
    pub total_candidates: usize,

    /// Failure message when the request could not be served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationResponse {
    pub(crate) fn ranked(
        recommendations: Vec<ScoredJob>,
        user_profile: UserProfile,
        generated_at: DateTime<Utc>,
        total_candidates: usize,
    ) -> Self {
        Self {
            recommendations,
            user_profile,
            generated_at,
            total_candidates,
            error: None,
        }
    }

    pub(crate) fn failed(user_profile: UserProfile, message: String) -> Self {
        Self {
            recommendations: Vec::new(),
            user_profile,
            generated_at: Utc::now(),
            total_candidates: 0,
            error: Some(message),
        }
    }

    /// Whether the request failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
