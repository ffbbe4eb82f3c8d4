//! Database error types for skin-db.

use skin_core::errors::{CoreError, QuizError};
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A once-per-user record (review, helpful mark) already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Quiz scoring or answer validation failed.
    #[error(transparent)]
    Quiz(#[from] QuizError),

    /// Domain validation or lookup failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Shorthand for a `CoreError::NotFound` lookup failure.
    pub(crate) fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::Core(CoreError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        })
    }
}
