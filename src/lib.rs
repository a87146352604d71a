//! # Caduceus
//!
//! A job search and matching engine for healthcare staffing job boards.
//!
//! Caduceus turns a free-text query plus structured filters, or a candidate
//! profile, into a ranked list of job postings. Relevance comes from synonym
//! and location-alias expansion, tiered exact/synonym/fuzzy text matching,
//! and multi-signal weighted scoring with explanations attached to every
//! result.
//!
//! ## Features
//!
//! - Symmetric skill-synonym and location-alias lexicons
//! - Exact, synonym, and edit-distance text matching
//! - Weighted relevance scoring with human-readable match reasons
//! - Profile-based recommendations with inferred experience and salary
//! - Query refinement suggestions and autocomplete
//! - Pluggable asynchronous job store
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use caduceus::{InMemoryJobStore, JobListing, SearchEngine, SearchFilters};
//!
//! #[tokio::main]
//! async fn main() -> caduceus::Result<()> {
//!     let store = Arc::new(InMemoryJobStore::new());
//!     store.put_listing(
//!         &JobListing::new("job-1", "ICU Registered Nurse", "Night shift ICU coverage")
//!             .set_tags("rn, icu")
//!             .set_location("San Francisco, CA"),
//!     )?;
//!
//!     let engine = SearchEngine::new(store);
//!     let response = engine.search_jobs("nurse sf", &SearchFilters::new()).await;
//!     for hit in &response.jobs {
//!         println!("{} ({:.2})", hit.job.title, hit.score());
//!     }
//!     Ok(())
//! }
//! ```

// Core modules
mod data;
pub mod engine;
mod error;
pub mod lexicon;
pub mod matcher;
pub mod query;
pub mod scoring;
pub mod store;
pub mod suggest;
mod util;

// Re-exports for the public API
pub use data::{JobListing, SalaryRange, ScoredJob, UserProfile};
pub use engine::config::{EngineConfig, EngineConfigBuilder};
pub use engine::filter::SearchFilters;
pub use engine::response::{RecommendationResponse, SearchResponse};
pub use engine::{DEFAULT_RECOMMENDATION_LIMIT, DEFAULT_SUGGESTION_LIMIT, SearchEngine};
pub use error::{CaduceusError, Result};
pub use query::EnhancedQuery;
pub use store::JobStore;
pub use store::memory::InMemoryJobStore;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
