//! In-memory job store.
//!
//! Backs tests and small single-process deployments. Records are serialized
//! JSON blobs keyed by job id, behind a read-write lock so concurrent
//! requests snapshot freely while an ingest writes.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::data::JobListing;
use crate::error::{CaduceusError, Result};
use crate::store::JobStore;

/// A [`JobStore`] backed by a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    records: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryJobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw serialized record under `id`, replacing any previous one.
    pub fn put_record(&self, id: impl Into<String>, bytes: Vec<u8>) {
        self.records.write().insert(id.into(), bytes);
    }

    /// Serialize a listing and insert it under its own id.
    pub fn put_listing(&self, listing: &JobListing) -> Result<()> {
        let bytes = serde_json::to_vec(listing)
            .map_err(|e| CaduceusError::internal(format!("failed to serialize listing: {e}")))?;
        self.put_record(listing.id.clone(), bytes);
        Ok(())
    }

    /// Remove a record.
    pub fn remove(&self, id: &str) -> bool {
        self.records.write().remove(id).is_some()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn job_ids(&self) -> Result<Vec<String>> {
        // Key order, so repeated snapshots of an unchanged store agree.
        let mut ids: Vec<String> = self.records.read().keys().cloned().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    async fn fetch_job(&self, id: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.records.read().get(id).cloned())
    }
}
