//! Core data types for the search engine.
//!
//! Job records are owned by an external job-posting CRUD component. The
//! engine reads them through the [`JobStore`](crate::store::JobStore) trait
//! and treats every record as immutable for the duration of one request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CaduceusError, Result};

/// Status value a posting must carry to be eligible for scoring.
pub const STATUS_ACTIVE: &str = "active";

/// A job posting, deserialized from the wire format used by the job store.
///
/// Unknown statuses, past expiry dates, and malformed optional fields never
/// panic; they only make the posting ineligible or neutral for scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    /// Unique identifier assigned by the CRUD component.
    pub id: String,

    /// Posting title.
    pub title: String,

    /// Free-text description.
    pub description: String,

    /// Comma- or space-separated skill tags.
    #[serde(default)]
    pub tags: String,

    /// Human-readable location ("San Francisco, CA").
    #[serde(default)]
    pub location: String,

    /// Category label ("nursing", "physician", ...).
    #[serde(default)]
    pub category: String,

    /// Advertised salary text ("$80k-$100k", "competitive").
    #[serde(default)]
    pub salary: String,

    /// Employment type ("full-time", "locum", ...).
    #[serde(default)]
    pub job_type: Option<String>,

    /// Lifecycle status; only [`STATUS_ACTIVE`] postings are searchable.
    pub status: String,

    /// Creation timestamp, drives the recency signal.
    pub created_at: DateTime<Utc>,

    /// Optional expiry; a past value removes the posting from all results.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,

    /// Number of times the posting has been viewed.
    #[serde(default)]
    pub view_count: u64,
}

impl JobListing {
    /// Create a minimal active posting created now.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags: String::new(),
            location: String::new(),
            category: String::new(),
            salary: String::new(),
            job_type: None,
            status: STATUS_ACTIVE.to_string(),
            created_at: Utc::now(),
            expires_at: None,
            view_count: 0,
        }
    }

    /// Set the skill tags.
    pub fn set_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Set the location.
    pub fn set_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the category.
    pub fn set_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the advertised salary text.
    pub fn set_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = salary.into();
        self
    }

    /// Set the employment type.
    pub fn set_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    /// Set the lifecycle status.
    pub fn set_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the creation timestamp.
    pub fn set_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the expiry timestamp.
    pub fn set_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Set the view count.
    pub fn set_view_count(mut self, view_count: u64) -> Self {
        self.view_count = view_count;
        self
    }

    /// Parse and validate one serialized record fetched from the job store.
    pub fn from_record_bytes(bytes: &[u8]) -> Result<Self> {
        let listing: JobListing = serde_json::from_slice(bytes)?;
        listing.validate()?;
        Ok(listing)
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CaduceusError::invalid_record("job record has an empty id"));
        }
        if self.title.trim().is_empty() {
            return Err(CaduceusError::invalid_record(format!(
                "job '{}' has an empty title",
                self.id
            )));
        }
        Ok(())
    }

    /// Whether the posting is eligible for matching: active and not expired.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.status == STATUS_ACTIVE && self.expires_at.is_none_or(|t| t > now)
    }

    /// Title, description, and tags joined for whole-posting matching.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.tags)
    }

    /// Days elapsed since creation, never negative.
    pub fn days_since_created(&self, now: DateTime<Utc>) -> f64 {
        ((now - self.created_at).num_seconds() as f64 / 86_400.0).max(0.0)
    }
}

/// A candidate profile, supplied per recommendation request and never stored
/// by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Skills the candidate claims.
    pub skills: Vec<String>,

    /// Years of professional experience.
    pub experience: u32,

    /// Locations the candidate wants to work in.
    pub preferred_locations: Vec<String>,

    /// Job categories the candidate prefers.
    pub preferred_categories: Vec<String>,

    /// Desired annual salary range.
    pub salary_expectations: Option<SalaryRange>,
}

impl UserProfile {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skills.
    pub fn set_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the years of experience.
    pub fn set_experience(mut self, years: u32) -> Self {
        self.experience = years;
        self
    }

    /// Set the preferred locations.
    pub fn set_preferred_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_locations = locations.into_iter().map(Into::into).collect();
        self
    }

    /// Set the preferred categories.
    pub fn set_preferred_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the salary expectations.
    pub fn set_salary_expectations(mut self, range: SalaryRange) -> Self {
        self.salary_expectations = Some(range);
        self
    }
}

/// An inclusive annual salary range in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    /// Create a new range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether two ranges share at least one value.
    pub fn overlaps(&self, other: &SalaryRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Distance between two disjoint ranges; zero when they overlap.
    pub fn gap_to(&self, other: &SalaryRange) -> f64 {
        if self.overlaps(other) {
            0.0
        } else if self.max < other.min {
            other.min - self.max
        } else {
            self.min - other.max
        }
    }

    /// Width of the range, never negative.
    pub fn width(&self) -> f64 {
        (self.max - self.min).max(0.0)
    }
}

/// A job listing with the score and explanations attached by one request.
///
/// Exactly one of `search_score` and `recommendation_score` is set by the
/// scored modes; browse results carry neither.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobListing,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_score: Option<f64>,

    pub match_reasons: Vec<String>,
}

impl ScoredJob {
    /// A browse-mode result: no scoring performed.
    pub fn unscored(job: JobListing) -> Self {
        Self {
            job,
            search_score: None,
            recommendation_score: None,
            match_reasons: Vec::new(),
        }
    }

    /// A query-mode search result.
    pub fn searched(job: JobListing, score: f64, match_reasons: Vec<String>) -> Self {
        Self {
            job,
            search_score: Some(score),
            recommendation_score: None,
            match_reasons,
        }
    }

    /// A profile-mode recommendation result.
    pub fn recommended(job: JobListing, score: f64, match_reasons: Vec<String>) -> Self {
        Self {
            job,
            search_score: None,
            recommendation_score: Some(score),
            match_reasons,
        }
    }

    /// The score attached by whichever mode produced this result.
    pub fn score(&self) -> f64 {
        self.search_score
            .or(self.recommendation_score)
            .unwrap_or(0.0)
    }
}
