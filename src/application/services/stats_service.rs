//! Click logging and statistics service.

use std::sync::Arc;

use crate::domain::repositories::{LinkClickStats, StatsOrder, StatsRepository};
use crate::error::{AppError, ClickLogError};

/// Upper bound for `top` in list queries.
const MAX_TOP: i64 = 1000;
/// Default number of entries returned by the top-links query.
pub const DEFAULT_TOP: i64 = 100;

/// Service for recording clicks and reading aggregated statistics.
pub struct StatsService {
    stats_repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    pub fn new(stats_repository: Arc<dyn StatsRepository>) -> Self {
        Self { stats_repository }
    }

    /// Records one click against a link.
    ///
    /// Best-effort from the redirect path's point of view: the caller logs
    /// and discards the error. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`ClickLogError`] when the persistence write fails.
    pub async fn log_click(&self, link_id: i64) -> Result<(), ClickLogError> {
        self.stats_repository.record_click(link_id).await
    }

    /// Returns aggregates for the most-clicked links, clamped to at most
    /// [`MAX_TOP`] entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage failures.
    pub async fn top_links(
        &self,
        order: StatsOrder,
        top: Option<i64>,
    ) -> Result<Vec<LinkClickStats>, AppError> {
        let limit = top.unwrap_or(DEFAULT_TOP).clamp(1, MAX_TOP);

        self.stats_repository.top_links(order, limit).await
    }

    /// Returns aggregates for a single link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short id is unknown.
    pub async fn link_stats(&self, short_id: &str) -> Result<LinkClickStats, AppError> {
        self.stats_repository
            .stats_by_short_id(short_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Link '{short_id}' not found")))
    }
}
