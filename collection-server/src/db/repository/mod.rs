//! Repository Module
//!
//! One repository per domain over the shared SQLite pool. Reads go through
//! the [`Collection`] trait; writes are repository methods that each run in
//! their own transaction.

// Listings
pub mod artist;
pub mod show;
pub mod venue;

// Trivia
pub mod category;
pub mod question;

// Coffee shop
pub mod drink;

// Re-exports
pub use artist::ArtistRepository;
pub use category::CategoryRepository;
pub use drink::DrinkRepository;
pub use question::QuestionRepository;
pub use show::ShowRepository;
pub use venue::VenueRepository;

use std::future::Future;

use shared::models::Keyed;
use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::utils::{AppError, ErrorCode};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique, foreign key, not-null or check constraint rejected the write
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// Pool closed, timed out or the connection broke
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl RepoError {
    /// Short classification label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            RepoError::NotFound(_) => "not_found",
            RepoError::Constraint(_) => "constraint",
            RepoError::Unavailable(_) => "unavailable",
            RepoError::Database(_) => "database",
        }
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => RepoError::Constraint(db.message().to_string()),
                _ => RepoError::Database(err.to_string()),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                RepoError::Unavailable(err.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => AppError::not_found(),
            RepoError::Unavailable(msg) => {
                AppError::with_message(ErrorCode::StorageUnavailable, msg)
            }
            RepoError::Constraint(msg) | RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Read access to one domain collection
///
/// Every method returns records ordered by primary key ascending.
pub trait Collection: Sync {
    type Record: Keyed + Send;
    type Filter: Sync;

    /// Resource name used in logs
    const RESOURCE: &'static str;

    fn find_all(&self) -> impl Future<Output = RepoResult<Vec<Self::Record>>> + Send;

    fn find_by_filter(
        &self,
        filter: &Self::Filter,
    ) -> impl Future<Output = RepoResult<Vec<Self::Record>>> + Send;

    /// Case-insensitive substring match on the designated text field
    fn find_by_text_match(
        &self,
        term: &str,
    ) -> impl Future<Output = RepoResult<Vec<Self::Record>>> + Send;
}

/// Substring test against an already lowercased needle
///
/// SQLite's `lower()` folds ASCII only, so text matching folds in Rust.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_not_found() {
        let err = RepoError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepoError::NotFound(_)));
        assert_eq!(AppError::from(err).code, ErrorCode::NotFound);
    }

    #[test]
    fn test_pool_errors_are_unavailable() {
        let err = RepoError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), "unavailable");
        assert_eq!(AppError::from(err).code, ErrorCode::StorageUnavailable);

        let err = RepoError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, RepoError::Unavailable(_)));
    }

    #[test]
    fn test_other_errors_are_database() {
        let err = RepoError::from(sqlx::Error::Protocol("bad frame".into()));
        assert_eq!(err.kind(), "database");
        assert_eq!(AppError::from(err).code, ErrorCode::DatabaseError);
    }

    #[test]
    fn test_contains_folded_handles_non_ascii() {
        assert!(contains_folded("Ärger über Öl", &"äRGER".to_lowercase()));
        assert!(contains_folded("Café Müller", "müll"));
        assert!(!contains_folded("Café Müller", "mueller"));
    }
}
