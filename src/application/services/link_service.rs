//! Link resolution and lifecycle service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use url::Url;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkFilter, LinkRepository};
use crate::error::AppError;
use crate::utils::short_id::generate_short_id;

/// Link lifetime applied when a creation request carries no `expire_seconds`.
pub const DEFAULT_EXPIRE_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Classification of a short id at resolution time.
///
/// Expected outcomes, not errors: callers match exhaustively instead of
/// catching anything. `Valid` carries the stored link so the caller can
/// redirect to `orig_url` verbatim and log the click against `id`.
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    NotFound,
    Inactive,
    Expired,
    Valid(Link),
}

/// Service for resolving, creating, listing, and deactivating short links.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Resolves a short id to a redirect outcome.
    ///
    /// Read-only; the `short_id` is looked up as-is with no format
    /// validation. Activity is checked before expiry, so an inactive link
    /// reports [`ResolveOutcome::Inactive`] regardless of `expire_at`.
    /// Expiry is evaluated against the current UTC instant with an inclusive
    /// boundary (`expire_at == now` is expired).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the lookup itself fails.
    pub async fn resolve(&self, short_id: &str) -> Result<ResolveOutcome, AppError> {
        let Some(link) = self.link_repository.find_by_short_id(short_id).await? else {
            return Ok(ResolveOutcome::NotFound);
        };

        if !link.is_active {
            return Ok(ResolveOutcome::Inactive);
        }

        if link.is_expired_at(Utc::now()) {
            return Ok(ResolveOutcome::Expired);
        }

        Ok(ResolveOutcome::Valid(link))
    }

    /// Creates a short link for `orig_url`.
    ///
    /// The URL is validated (http/https only) but stored verbatim, without
    /// normalization. The short id is generated randomly with up to 10
    /// retries on collision.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] for an invalid URL and
    /// [`AppError::Database`] on storage failures.
    pub async fn create_link(
        &self,
        orig_url: String,
        expire_seconds: Option<i64>,
    ) -> Result<Link, AppError> {
        validate_orig_url(&orig_url)?;

        let expire_at =
            Utc::now() + Duration::seconds(expire_seconds.unwrap_or(DEFAULT_EXPIRE_SECONDS));

        let short_id = self.generate_unique_short_id().await?;

        self.link_repository
            .create(NewLink {
                short_id,
                orig_url,
                expire_at,
            })
            .await
    }

    /// Lists links with the given filter, returning `(items, total_count)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage failures.
    pub async fn list_links(
        &self,
        filter: LinkFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Link>, i64), AppError> {
        let items = self.link_repository.list(filter, offset, limit).await?;
        let total = self.link_repository.count(filter).await?;

        Ok((items, total))
    }

    /// Deactivates a link so subsequent resolutions yield
    /// [`ResolveOutcome::Inactive`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the short id.
    pub async fn deactivate_link(&self, short_id: &str) -> Result<Link, AppError> {
        self.link_repository
            .deactivate(short_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Link '{short_id}' not found")))
    }

    /// Generates a short id not yet present in storage.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_short_id(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let short_id = generate_short_id();

            if self
                .link_repository
                .find_by_short_id(&short_id)
                .await?
                .is_none()
            {
                return Ok(short_id);
            }
        }

        Err(AppError::internal("Failed to generate unique short id"))
    }
}

fn validate_orig_url(orig_url: &str) -> Result<(), AppError> {
    let parsed =
        Url::parse(orig_url).map_err(|_| AppError::bad_request("Invalid URL format"))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::bad_request(
            "Only http and https URLs can be shortened",
        ));
    }

    Ok(())
}
