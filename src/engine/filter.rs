//! Structured search filters and the intelligent filter pipeline.
//!
//! Filters are hard predicates, not scoring signals: a job either survives
//! every set predicate or is dropped. Unset predicates pass everything, and
//! a job whose text does not yield a value for a predicate (no parseable
//! salary, say) passes rather than fails.

use serde::{Deserialize, Serialize};

use crate::data::{JobListing, SalaryRange};
use crate::lexicon;
use crate::scoring::profile::{extract_experience, extract_salary};

/// How many more required years than requested the experience predicate
/// tolerates before rejecting a job.
const EXPERIENCE_FLEXIBILITY_YEARS: u32 = 3;

/// Structured filters accompanying a search or filter request.
///
/// All fields are optional. An entirely empty filter set combined with an
/// empty query switches `search_jobs` into browse mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Exact category the job must carry.
    pub category: Option<String>,

    /// Candidate's years of experience.
    pub experience: Option<u32>,

    /// Desired location; matched through the location lexicon.
    pub location: Option<String>,

    /// Lower bound of the desired salary range.
    pub min_salary: Option<f64>,

    /// Upper bound of the desired salary range.
    pub max_salary: Option<f64>,

    /// Exact employment type the job must carry.
    pub job_type: Option<String>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter.
    pub fn set_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the candidate experience filter.
    pub fn set_experience(mut self, years: u32) -> Self {
        self.experience = Some(years);
        self
    }

    /// Set the location filter.
    pub fn set_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the minimum salary filter.
    pub fn set_min_salary(mut self, min_salary: f64) -> Self {
        self.min_salary = Some(min_salary);
        self
    }

    /// Set the maximum salary filter.
    pub fn set_max_salary(mut self, max_salary: f64) -> Self {
        self.max_salary = Some(max_salary);
        self
    }

    /// Set the employment type filter.
    pub fn set_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    /// True when no filter field is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.experience.is_none()
            && self.location.is_none()
            && self.min_salary.is_none()
            && self.max_salary.is_none()
            && self.job_type.is_none()
    }
}

/// Keep only the jobs that pass every set predicate.
///
/// Predicates are independent and AND-combined; no scoring happens here.
/// The category filter is deliberately absent: in the search pipeline it
/// acts as a scoring bonus instead of a hard cut.
pub fn filter_jobs(jobs: &[JobListing], filters: &SearchFilters) -> Vec<JobListing> {
    jobs.iter()
        .filter(|job| passes_experience(job, filters))
        .filter(|job| passes_location(job, filters))
        .filter(|job| passes_salary(job, filters))
        .filter(|job| passes_job_type(job, filters))
        .cloned()
        .collect()
}

/// Reject only when the job requires at least three more years than the
/// candidate has.
fn passes_experience(job: &JobListing, filters: &SearchFilters) -> bool {
    let Some(requested) = filters.experience else {
        return true;
    };
    let required = extract_experience(&job.title, &job.description);
    required.saturating_sub(requested) < EXPERIENCE_FLEXIBILITY_YEARS
}

fn passes_location(job: &JobListing, filters: &SearchFilters) -> bool {
    let Some(wanted) = filters.location.as_deref() else {
        return true;
    };
    lexicon::locations().matches_in(wanted, &job.location)
}

/// Salary ranges must overlap; a job with no parseable salary passes.
fn passes_salary(job: &JobListing, filters: &SearchFilters) -> bool {
    let wanted = match (filters.min_salary, filters.max_salary) {
        (None, None) => return true,
        (min, max) => SalaryRange::new(min.unwrap_or(0.0), max.unwrap_or(f64::MAX)),
    };
    match extract_salary(&job.salary, &job.description) {
        Some(advertised) => advertised.overlaps(&wanted),
        None => true,
    }
}

fn passes_job_type(job: &JobListing, filters: &SearchFilters) -> bool {
    let Some(wanted) = filters.job_type.as_deref() else {
        return true;
    };
    job.job_type.as_deref() == Some(wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs() -> Vec<JobListing> {
        vec![
            JobListing::new(
                "job-1",
                "Senior ICU Nurse",
                "Requires 6 years experience. $95k-$115k.",
            )
            .set_location("San Francisco, CA")
            .set_job_type("full-time"),
            JobListing::new("job-2", "Junior Nurse", "Entry level role, great mentorship")
                .set_location("Austin, TX")
                .set_job_type("locum"),
        ]
    }

    #[test]
    fn test_empty_filters_pass_everything() {
        let jobs = jobs();
        let filters = SearchFilters::new();
        assert!(filters.is_empty());
        assert_eq!(filter_jobs(&jobs, &filters).len(), 2);
    }

    #[test]
    fn test_experience_flexibility_window() {
        let jobs = jobs();

        // job-1 requires 6 years, three more than requested: rejected.
        let strict = SearchFilters::new().set_experience(3);
        let kept = filter_jobs(&jobs, &strict);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "job-2");

        // One more year of candidate experience readmits it.
        let relaxed = SearchFilters::new().set_experience(4);
        assert_eq!(filter_jobs(&jobs, &relaxed).len(), 2);
    }

    #[test]
    fn test_experience_filter_accepts_huge_requested_years() {
        let jobs = jobs();
        let filters = SearchFilters::new().set_experience(u32::MAX);
        assert_eq!(filter_jobs(&jobs, &filters).len(), 2);
    }

    #[test]
    fn test_location_filter_uses_aliases() {
        let jobs = jobs();
        let filters = SearchFilters::new().set_location("sf");
        let kept = filter_jobs(&jobs, &filters);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "job-1");
    }

    #[test]
    fn test_salary_filter_overlap() {
        let jobs = jobs();

        // job-1 advertises $95k-$115k; job-2 has no parseable salary and
        // therefore passes any salary filter.
        let filters = SearchFilters::new().set_min_salary(120_000.0);
        let kept = filter_jobs(&jobs, &filters);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "job-2");

        let filters = SearchFilters::new()
            .set_min_salary(100_000.0)
            .set_max_salary(110_000.0);
        assert_eq!(filter_jobs(&jobs, &filters).len(), 2);
    }

    #[test]
    fn test_salary_filter_skips_year_spans() {
        // The only number range is a span of years, so no salary is
        // extracted and the job passes.
        let jobs = vec![JobListing::new(
            "job-3",
            "ICU Nurse",
            "Requires 3-5 years experience in the ICU",
        )];
        let filters = SearchFilters::new().set_min_salary(100_000.0);
        assert_eq!(filter_jobs(&jobs, &filters).len(), 1);
    }

    #[test]
    fn test_job_type_filter_is_exact() {
        let jobs = jobs();
        let filters = SearchFilters::new().set_job_type("locum");
        let kept = filter_jobs(&jobs, &filters);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "job-2");

        // A job without a type never matches a type filter.
        let untyped = vec![JobListing::new("job-3", "Nurse", "x")];
        assert!(filter_jobs(&untyped, &filters).is_empty());
    }

    #[test]
    fn test_predicates_are_anded() {
        let jobs = jobs();
        let filters = SearchFilters::new()
            .set_location("sf")
            .set_job_type("locum");
        assert!(filter_jobs(&jobs, &filters).is_empty());
    }
}
