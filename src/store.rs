//! Job record storage collaborators.
//!
//! The engine does not own persistence. Job postings live in an external
//! CRUD component; the engine reads them through the [`JobStore`] trait and
//! treats every call as an asynchronous I/O boundary.

pub mod memory;

use async_trait::async_trait;

use crate::error::Result;

/// Read-only access to serialized job records.
///
/// Implementations must be safe for unlimited concurrent reads; the engine
/// issues overlapping calls from parallel requests. A failure from either
/// method aborts the request that issued it, and the engine never retries.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// List the keys of every stored job record.
    async fn job_ids(&self) -> Result<Vec<String>>;

    /// Fetch one serialized job record. `None` means the key vanished
    /// between listing and fetching, which the engine treats as a skip.
    async fn fetch_job(&self, id: &str) -> Result<Option<Vec<u8>>>;
}
