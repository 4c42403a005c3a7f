//! Error types for the audit crate.

use thiserror::Error;

/// Errors that can occur while writing an audit row.
///
/// These never cross the logger boundary; they exist so store implementations
/// and the logger's internal write path can report precisely what failed.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Payload serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The database rejected the transaction or the insert.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(String),
}
