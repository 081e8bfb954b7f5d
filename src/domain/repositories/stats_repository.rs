//! Repository trait for click logging and aggregated statistics.

use crate::error::{AppError, ClickLogError};
use async_trait::async_trait;

/// Click aggregates for a single link over fixed windows.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LinkClickStats {
    pub short_id: String,
    pub orig_url: String,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
    pub all_clicks: i64,
}

/// Sort column for top-links queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsOrder {
    LastHour,
    LastDay,
    AllTime,
}

/// Repository interface for click events and their aggregates.
///
/// Click writes are append-only; nothing in the redirect path ever reads
/// them back.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Records one click for the given link.
    ///
    /// # Errors
    ///
    /// Returns [`ClickLogError`] when the write fails (storage unavailable,
    /// constraint violation). The caller decides whether that is fatal; the
    /// redirect path swallows it.
    async fn record_click(&self, link_id: i64) -> Result<(), ClickLogError>;

    /// Returns click aggregates for the most-clicked links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn top_links(
        &self,
        order: StatsOrder,
        limit: i64,
    ) -> Result<Vec<LinkClickStats>, AppError>;

    /// Returns click aggregates for one link, or `Ok(None)` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn stats_by_short_id(&self, short_id: &str)
    -> Result<Option<LinkClickStats>, AppError>;
}
