//! Error types for log windowing.

use thiserror::Error;

/// Result type alias for log windowing operations.
pub type LogsResult<T> = Result<T, LogsError>;

/// Errors that can occur while producing a log window.
#[derive(Debug, Error)]
pub enum LogsError {
    /// Page size was zero or negative
    #[error("invalid page size {count}: must be a positive number of lines")]
    InvalidPageSize { count: i64 },

    /// No container was named and the pod declares none
    #[error("pod '{pod}' in namespace '{namespace}' declares no containers")]
    NoContainer { namespace: String, pod: String },

    /// Unrecognised page move name
    #[error("unknown page move '{0}': expected first, prev, next or last")]
    InvalidPageMove(String),

    /// The pod or its logs could not be retrieved
    #[error(transparent)]
    Lookup(anyhow::Error),
}
