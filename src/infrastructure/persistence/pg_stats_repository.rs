//! PostgreSQL implementation of statistics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{LinkClickStats, StatsOrder, StatsRepository};
use crate::error::{AppError, ClickLogError};

const STATS_SELECT: &str = r#"
    SELECT
        l.short_id,
        l.orig_url,
        COUNT(c.id) FILTER (WHERE c.clicked_at >= now() - INTERVAL '1 hour') AS last_hour_clicks,
        COUNT(c.id) FILTER (WHERE c.clicked_at >= now() - INTERVAL '1 day') AS last_day_clicks,
        COUNT(c.id) AS all_clicks
    FROM links l
    LEFT JOIN link_clicks c ON c.link_id = l.id
"#;

/// PostgreSQL repository for click events and windowed aggregates.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_click(&self, link_id: i64) -> Result<(), ClickLogError> {
        sqlx::query("INSERT INTO link_clicks (link_id) VALUES ($1)")
            .bind(link_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn top_links(
        &self,
        order: StatsOrder,
        limit: i64,
    ) -> Result<Vec<LinkClickStats>, AppError> {
        // Column name comes from a fixed match, never from user input.
        let order_column = match order {
            StatsOrder::LastHour => "last_hour_clicks",
            StatsOrder::LastDay => "last_day_clicks",
            StatsOrder::AllTime => "all_clicks",
        };

        let sql = format!(
            "{STATS_SELECT} GROUP BY l.id, l.short_id, l.orig_url \
             ORDER BY {order_column} DESC LIMIT $1"
        );

        let stats = sqlx::query_as::<_, LinkClickStats>(&sql)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(stats)
    }

    async fn stats_by_short_id(
        &self,
        short_id: &str,
    ) -> Result<Option<LinkClickStats>, AppError> {
        let sql = format!(
            "{STATS_SELECT} WHERE l.short_id = $1 GROUP BY l.id, l.short_id, l.orig_url"
        );

        let stats = sqlx::query_as::<_, LinkClickStats>(&sql)
            .bind(short_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(stats)
    }
}
