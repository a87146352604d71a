//! Search orchestration.
//!
//! [`SearchEngine`] wires the pipeline together: snapshot open postings from
//! the job store, branch on query-vs-browse mode, score candidates across a
//! thread pool, rank, and attach suggestions. The engine holds no mutable
//! state; every request works over a freshly fetched snapshot, so requests
//! may run fully in parallel and two results never share score state.

pub mod config;
pub mod filter;
pub mod response;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use log::{debug, error, warn};
use rayon::prelude::*;

use crate::data::{JobListing, ScoredJob, UserProfile};
use crate::error::{CaduceusError, Result};
use crate::query::{self, EnhancedQuery};
use crate::scoring::{profile as profile_scoring, search as search_scoring};
use crate::store::JobStore;
use crate::suggest;

use self::config::EngineConfig;
use self::filter::SearchFilters;
use self::response::{RecommendationResponse, SearchResponse};

/// Recommendations returned when the caller does not ask for a count.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// Autocomplete suggestions returned when the caller does not ask for a count.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Days a posting keeps its browse-mode recency credit.
const BROWSE_RECENCY_WINDOW_DAYS: f64 = 30.0;

/// The job search and matching engine.
///
/// Acts as a facade over the enhancement, matching, scoring, and suggestion
/// components. Construction is cheap; the engine owns nothing but a handle
/// to the job store and its configuration, and a single instance can be
/// shared across request handlers.
pub struct SearchEngine {
    store: Arc<dyn JobStore>,
    config: EngineConfig,
}

impl SearchEngine {
    /// Create an engine over `store` with the default configuration.
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(store: Arc<dyn JobStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Execute a free-text search with structured filters.
    ///
    /// An empty query with empty filters switches to browse mode: every open
    /// posting ranked by recency-weighted popularity, with no scores and no
    /// suggestions attached.
    ///
    /// Never returns an error to the caller: internal failures are logged
    /// and folded into a response carrying the message in `error`.
    pub async fn search_jobs(&self, raw_query: &str, filters: &SearchFilters) -> SearchResponse {
        match self.search_jobs_inner(raw_query, filters).await {
            Ok(response) => response,
            Err(e) => {
                error!("search for {raw_query:?} failed: {e}");
                SearchResponse::failed(query::enhance(raw_query), e.to_string())
            }
        }
    }

    async fn search_jobs_inner(
        &self,
        raw_query: &str,
        filters: &SearchFilters,
    ) -> Result<SearchResponse> {
        let now = Utc::now();

        // 1. Snapshot the open postings.
        let candidates = self.fetch_open_jobs(now).await?;

        // 2. Browse mode: nothing to match against, rank by popularity.
        if raw_query.trim().is_empty() && filters.is_empty() {
            let jobs = browse_ranking(candidates, now);
            return Ok(SearchResponse::ranked(
                jobs,
                EnhancedQuery::default(),
                now,
                Vec::new(),
            ));
        }

        // 3. Enhance the query once; every candidate scores against the
        //    same expansion.
        let enhanced = query::enhance(raw_query);

        // 4. Score in parallel, dropping jobs below the threshold.
        let mut hits: Vec<ScoredJob> = candidates
            .par_iter()
            .filter_map(|job| {
                let score = search_scoring::score_job(job, &enhanced, filters, now);
                if score > search_scoring::SEARCH_SCORE_THRESHOLD {
                    let reasons = search_scoring::match_reasons(job, &enhanced, filters);
                    Some(ScoredJob::searched(job.clone(), score, reasons))
                } else {
                    None
                }
            })
            .collect();

        // 5. Rank best-first; the stable sort keeps snapshot order on ties.
        hits.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // 6. Mine the top results for refinement suggestions.
        let suggestions = suggest::refine_query(&enhanced.original_query, &hits);

        debug!(
            "search {:?} matched {} of {} candidates",
            enhanced.original_query,
            hits.len(),
            candidates.len()
        );
        Ok(SearchResponse::ranked(hits, enhanced, now, suggestions))
    }

    /// Produce personalized recommendations for a candidate profile.
    ///
    /// Never returns an error to the caller; failures are folded into the
    /// envelope the same way `search_jobs` does it.
    pub async fn recommend_jobs(
        &self,
        profile: &UserProfile,
        limit: usize,
    ) -> RecommendationResponse {
        match self.recommend_jobs_inner(profile, limit).await {
            Ok(response) => response,
            Err(e) => {
                error!("recommendations failed: {e}");
                RecommendationResponse::failed(profile.clone(), e.to_string())
            }
        }
    }

    async fn recommend_jobs_inner(
        &self,
        profile: &UserProfile,
        limit: usize,
    ) -> Result<RecommendationResponse> {
        let now = Utc::now();

        // 1. Snapshot the open postings.
        let candidates = self.fetch_open_jobs(now).await?;
        let total_candidates = candidates.len();

        // 2. Score against the profile in parallel.
        let mut hits: Vec<ScoredJob> = candidates
            .par_iter()
            .filter_map(|job| {
                let score = profile_scoring::score_job(job, profile);
                if score > profile_scoring::RECOMMENDATION_SCORE_THRESHOLD {
                    let reasons = profile_scoring::match_reasons(job, profile);
                    Some(ScoredJob::recommended(job.clone(), score, reasons))
                } else {
                    None
                }
            })
            .collect();

        // 3. Rank best-first and cut to the requested count.
        hits.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit);

        debug!(
            "recommended {} of {} candidates",
            hits.len(),
            total_candidates
        );
        Ok(RecommendationResponse::ranked(
            hits,
            profile.clone(),
            now,
            total_candidates,
        ))
    }

    /// Autocomplete suggestions for a partially typed query.
    ///
    /// Best-effort: a store failure yields an empty list, never an error.
    pub async fn search_suggestions(&self, partial_query: &str, limit: usize) -> Vec<String> {
        let now = Utc::now();
        match self.fetch_open_jobs(now).await {
            Ok(jobs) => suggest::autocomplete(&jobs, partial_query, limit),
            Err(e) => {
                error!("autocomplete for {partial_query:?} failed: {e}");
                Vec::new()
            }
        }
    }

    /// Apply the hard filter predicates to an already-fetched job set.
    ///
    /// Pure and synchronous; see [`filter::filter_jobs`].
    pub fn filter_jobs(&self, jobs: &[JobListing], filters: &SearchFilters) -> Vec<JobListing> {
        filter::filter_jobs(jobs, filters)
    }

    /// Snapshot the store: list keys, fetch records concurrently, keep only
    /// open postings.
    ///
    /// The snapshot is capped at `config.max_candidates` records and bounded
    /// by `config.request_timeout`. A store failure aborts the request; a
    /// record that fails deserialization or validation is skipped with a
    /// warning instead.
    async fn fetch_open_jobs(&self, now: DateTime<Utc>) -> Result<Vec<JobListing>> {
        let deadline = self.config.request_timeout;
        match tokio::time::timeout(deadline, self.snapshot_open_jobs(now)).await {
            Ok(result) => result,
            Err(_) => Err(CaduceusError::timeout(format!(
                "job snapshot exceeded {}ms",
                deadline.as_millis()
            ))),
        }
    }

    async fn snapshot_open_jobs(&self, now: DateTime<Utc>) -> Result<Vec<JobListing>> {
        let mut ids = self.store.job_ids().await?;
        if ids.len() > self.config.max_candidates {
            warn!(
                "candidate scan capped at {} of {} records",
                self.config.max_candidates,
                ids.len()
            );
            ids.truncate(self.config.max_candidates);
        }

        let records = join_all(ids.iter().map(|id| self.store.fetch_job(id))).await;

        let mut jobs = Vec::with_capacity(records.len());
        for (id, record) in ids.iter().zip(records) {
            let bytes = match record? {
                Some(bytes) => bytes,
                // Deleted between listing and fetching.
                None => continue,
            };
            match JobListing::from_record_bytes(&bytes) {
                Ok(job) if job.is_open(now) => jobs.push(job),
                Ok(_) => {}
                Err(e) => warn!("skipping malformed job record {id:?}: {e}"),
            }
        }
        Ok(jobs)
    }
}

/// Default ranking when neither query nor filters are present.
fn browse_ranking(candidates: Vec<JobListing>, now: DateTime<Utc>) -> Vec<ScoredJob> {
    let mut ranked: Vec<(f64, JobListing)> = candidates
        .into_iter()
        .map(|job| (browse_score(&job, now), job))
        .collect();

    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    ranked
        .into_iter()
        .map(|(_, job)| ScoredJob::unscored(job))
        .collect()
}

/// Recency-weighted popularity: days left in the freshness window plus raw
/// view count.
fn browse_score(job: &JobListing, now: DateTime<Utc>) -> f64 {
    let recency = (BROWSE_RECENCY_WINDOW_DAYS - job.days_since_created(now)).max(0.0);
    recency + job.view_count as f64
}
