//! Error types for the caduceus search engine.

use thiserror::Error;

/// Errors produced by the engine and its collaborators.
#[derive(Debug, Error)]
pub enum CaduceusError {
    /// The job store failed while listing keys or fetching a record.
    #[error("store error: {0}")]
    Store(String),

    /// A serialized job record failed deserialization or validation.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A caller supplied an argument the engine cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A request exceeded its configured deadline.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// An unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CaduceusError {
    /// Create a store error.
    pub fn store(msg: impl Into<String>) -> Self {
        CaduceusError::Store(msg.into())
    }

    /// Create an invalid record error.
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        CaduceusError::InvalidRecord(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        CaduceusError::InvalidArgument(msg.into())
    }

    /// Create a timeout error.
    pub fn timeout(msg: impl Into<String>) -> Self {
        CaduceusError::Timeout(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        CaduceusError::Internal(msg.into())
    }
}

impl From<serde_json::Error> for CaduceusError {
    fn from(err: serde_json::Error) -> Self {
        CaduceusError::InvalidRecord(err.to_string())
    }
}

/// Result type alias for caduceus operations.
pub type Result<T> = std::result::Result<T, CaduceusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CaduceusError::store("connection refused");
        assert_eq!(err.to_string(), "store error: connection refused");

        let err = CaduceusError::invalid_record("missing field `title`");
        assert_eq!(err.to_string(), "invalid record: missing field `title`");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: CaduceusError = err.into();
        assert!(matches!(converted, CaduceusError::InvalidRecord(_)));
    }
}
