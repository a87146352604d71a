//! Engine configuration.

use std::time::Duration;

/// Default cap on how many job records one request will scan.
pub const DEFAULT_MAX_CANDIDATES: usize = 10_000;

/// Default deadline for one snapshot fetch from the job store.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the search engine.
///
/// Every request re-scores the full candidate set, so cost is linear in the
/// number of open postings: `max_candidates` bounds that scan and
/// `request_timeout` bounds the snapshot fetch that precedes it.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upper bound on records fetched and scored per request.
    pub max_candidates: usize,

    /// Deadline for the snapshot fetch from the job store.
    pub request_timeout: Duration,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`EngineConfig`].
pub struct EngineConfigBuilder {
    max_candidates: usize,
    request_timeout: Duration,
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        let defaults = EngineConfig::new();
        Self {
            max_candidates: defaults.max_candidates,
            request_timeout: defaults.request_timeout,
        }
    }
}

impl EngineConfigBuilder {
    /// Cap the number of records scanned per request.
    pub fn max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Set the snapshot fetch deadline.
    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn build(self) -> EngineConfig {
        EngineConfig {
            max_candidates: self.max_candidates,
            request_timeout: self.request_timeout,
        }
    }
}
