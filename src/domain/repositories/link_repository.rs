//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Listing filter for links.
///
/// `is_valid` means "active and not yet expired"; `None` fields are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkFilter {
    pub is_active: Option<bool>,
    pub is_valid: Option<bool>,
}

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors, including a unique
    /// violation when the short id is already taken.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short id.
    ///
    /// Single point query; absence yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError>;

    /// Lists links ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list(&self, filter: LinkFilter, offset: i64, limit: i64)
    -> Result<Vec<Link>, AppError>;

    /// Counts links matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn count(&self, filter: LinkFilter) -> Result<i64, AppError>;

    /// Sets `is_active = false` and returns the updated link.
    ///
    /// Returns `Ok(None)` if no link matches the short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn deactivate(&self, short_id: &str) -> Result<Option<Link>, AppError>;
}
