use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use caduceus::{
    CaduceusError, DEFAULT_RECOMMENDATION_LIMIT, InMemoryJobStore, JobListing, JobStore,
    SalaryRange, SearchEngine, UserProfile,
};

fn engine_with(jobs: Vec<JobListing>) -> SearchEngine {
    let store = Arc::new(InMemoryJobStore::new());
    for job in &jobs {
        store.put_listing(job).unwrap();
    }
    SearchEngine::new(store)
}

fn icu_job(id: &str) -> JobListing {
    JobListing::new(
        id,
        "ICU Registered Nurse",
        "Seeking an ICU nurse with 5 years experience. Salary $85,000 - $105,000.",
    )
    .set_tags("rn, icu, critical care")
    .set_location("San Francisco, CA")
    .set_category("nursing")
}

fn nurse_profile() -> UserProfile {
    UserProfile::new()
        .set_skills(["nurse", "icu"])
        .set_experience(5)
        .set_preferred_locations(["sf"])
        .set_preferred_categories(["nursing"])
        .set_salary_expectations(SalaryRange::new(90_000.0, 110_000.0))
}

#[tokio::test]
async fn test_matching_jobs_outrank_unrelated_jobs() {
    let unrelated = JobListing::new("job-2", "Forklift Operator", "Warehouse shifts, no nights");
    let engine = engine_with(vec![unrelated, icu_job("job-1")]);

    let response = engine
        .recommend_jobs(&nurse_profile(), DEFAULT_RECOMMENDATION_LIMIT)
        .await;

    assert!(!response.is_error());
    assert_eq!(response.total_candidates, 2);
    assert_eq!(
        response.recommendations[0].job.id, "job-1",
        "the nursing job should rank first"
    );
    // The warehouse job shares nothing with the profile and stays below the
    // recommendation threshold.
    assert_eq!(response.recommendations.len(), 1);
}

#[tokio::test]
async fn test_recommendations_carry_scores_and_reasons() {
    let engine = engine_with(vec![icu_job("job-1")]);
    let response = engine.recommend_jobs(&nurse_profile(), 10).await;

    let hit = &response.recommendations[0];
    let score = hit
        .recommendation_score
        .expect("recommendation mode attaches a score");
    assert!(score > 0.3 && score <= 1.0);
    assert!(hit.search_score.is_none());

    assert!(!hit.match_reasons.is_empty());
    assert!(hit.match_reasons.len() <= 3);
    assert!(
        hit.match_reasons[0].contains("nurse"),
        "skill reasons come first, got {:?}",
        hit.match_reasons
    );
}

#[tokio::test]
async fn test_recommendation_limit_is_respected() {
    let jobs = (1..=4).map(|i| icu_job(&format!("job-{i}"))).collect();
    let engine = engine_with(jobs);

    let response = engine.recommend_jobs(&nurse_profile(), 2).await;

    assert_eq!(response.recommendations.len(), 2);
    assert_eq!(response.total_candidates, 4);
}

#[tokio::test]
async fn test_empty_profile_gets_no_recommendations() {
    let engine = engine_with(vec![icu_job("job-1")]);
    let response = engine
        .recommend_jobs(&UserProfile::new(), DEFAULT_RECOMMENDATION_LIMIT)
        .await;

    assert!(!response.is_error());
    assert!(
        response.recommendations.is_empty(),
        "an empty profile matches nothing strongly enough"
    );
    assert_eq!(response.total_candidates, 1);
}

#[tokio::test]
async fn test_expired_jobs_are_never_recommended() {
    let now = Utc::now();
    let expired = icu_job("job-2").set_expires_at(now - Duration::days(3));
    let engine = engine_with(vec![icu_job("job-1"), expired]);

    let response = engine.recommend_jobs(&nurse_profile(), 10).await;

    assert_eq!(response.total_candidates, 1);
    assert!(response.recommendations.iter().all(|r| r.job.id != "job-2"));
}

struct FailingStore;

#[async_trait]
impl JobStore for FailingStore {
    async fn job_ids(&self) -> caduceus::Result<Vec<String>> {
        Err(CaduceusError::store("connection refused"))
    }

    async fn fetch_job(&self, _id: &str) -> caduceus::Result<Option<Vec<u8>>> {
        Err(CaduceusError::store("connection refused"))
    }
}

#[tokio::test]
async fn test_store_failure_becomes_error_envelope() {
    let engine = SearchEngine::new(Arc::new(FailingStore));
    let response = engine.recommend_jobs(&nurse_profile(), 10).await;

    assert!(response.is_error());
    assert!(response.recommendations.is_empty());
    assert_eq!(response.total_candidates, 0);
    // The envelope echoes the profile it was asked about.
    assert_eq!(response.user_profile.skills, vec!["nurse", "icu"]);
}
