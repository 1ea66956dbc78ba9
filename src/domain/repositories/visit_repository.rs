//! Repository trait for visit tracking and aggregation.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for visit records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Records a new visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// missing `link_id` reference. Callers on the redirect path must not
    /// propagate this to the end user.
    async fn record(&self, new_visit: NewVisit) -> Result<Visit, AppError>;

    /// Counts visits for a link as a single aggregate query.
    ///
    /// Scales with the index on `(link_id, visited_at)`, not with row
    /// volume; no visit rows are fetched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_link_id(&self, link_id: i64) -> Result<i64, AppError>;
}
