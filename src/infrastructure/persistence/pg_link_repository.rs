//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkFilter, LinkRepository};
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// All queries are single statements with bound parameters; the redirect
/// path relies on the storage engine's guarantees, not on transactions.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (short_id, orig_url, expire_at)
            VALUES ($1, $2, $3)
            RETURNING id, short_id, orig_url, is_active, created_at, expire_at
            "#,
        )
        .bind(&new_link.short_id)
        .bind(&new_link.orig_url)
        .bind(new_link.expire_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, short_id, orig_url, is_active, created_at, expire_at
            FROM links
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn list(
        &self,
        filter: LinkFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, short_id, orig_url, is_active, created_at, expire_at
            FROM links
            WHERE ($1::boolean IS NULL OR is_active = $1)
              AND ($2::boolean IS NULL OR (is_active AND expire_at > now()) = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.is_active)
        .bind(filter.is_valid)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn count(&self, filter: LinkFilter) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM links
            WHERE ($1::boolean IS NULL OR is_active = $1)
              AND ($2::boolean IS NULL OR (is_active AND expire_at > now()) = $2)
            "#,
        )
        .bind(filter.is_active)
        .bind(filter.is_valid)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn deactivate(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET is_active = FALSE
            WHERE short_id = $1
            RETURNING id, short_id, orig_url, is_active, created_at, expire_at
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }
}
