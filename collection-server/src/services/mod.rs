//! Service layer
//!
//! - [`query`] - generic listing, search and random selection over a [`Collection`]
//! - [`listing`] - venue and artist views (grouping, summaries, detail pages)
//!
//! [`Collection`]: crate::db::repository::Collection

pub mod listing;
pub mod query;

use crate::db::repository::RepoError;
use crate::utils::AppError;

/// Map a failed write to the error the caller sees
///
/// A missing record stays a not-found. Anything else is logged with its
/// classification and replaced by `failure`, so storage details never leak.
pub fn write_failed(err: RepoError, resource: &str, failure: AppError) -> AppError {
    if let RepoError::NotFound(_) = err {
        return AppError::not_found();
    }
    tracing::warn!(
        resource = resource,
        kind = err.kind(),
        error = %err,
        "Write failed, transaction rolled back"
    );
    failure
}
