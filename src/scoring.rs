//! Relevance scoring.
//!
//! Two scoring modes share the text matcher and the lexicons:
//!
//! - [`search`] scores jobs against an enhanced free-text query.
//! - [`profile`] scores jobs against a candidate profile.
//!
//! Both are pure functions over one job plus request context, which is what
//! lets the orchestrator fan them out across a thread pool.

pub mod profile;
pub mod search;

/// Maximum number of match reasons attached to one scored job.
pub(crate) const MAX_MATCH_REASONS: usize = 3;
