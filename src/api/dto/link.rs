//! DTOs for link creation and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkFilter;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL to alias (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub orig_url: String,

    /// Lifetime in seconds; defaults to 30 days when absent.
    #[validate(range(min = 1, message = "expire_seconds must be positive"))]
    pub expire_seconds: Option<i64>,
}

/// Public link representation.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub orig_url: String,
    pub short_id: String,
    /// Full short URL built from the configured public base.
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
    pub is_active: bool,
}

impl LinkResponse {
    pub fn from_link(link: Link, base_url: &str) -> Self {
        Self {
            short_url: format!("{}/{}", base_url, link.short_id),
            id: link.id,
            orig_url: link.orig_url,
            short_id: link.short_id,
            created_at: link.created_at,
            expire_at: link.expire_at,
            is_active: link.is_active,
        }
    }
}

/// Paginated link listing.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: i64,
    pub items: Vec<LinkResponse>,
}

/// Query parameters for `GET /api/links`.
///
/// Uses `serde_with` to parse numbers and booleans from query strings.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct LinkListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub is_active: Option<bool>,

    /// Filters on "active and not yet expired".
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub is_valid: Option<bool>,
}

impl LinkListParams {
    /// Validates pagination parameters and converts to database offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 10
    ///
    /// # Returns
    ///
    /// `(page, page_size, offset, limit)` with page size capped at 1-100.
    pub fn validate_and_get_offset_limit(&self) -> Result<(u32, u32, i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(10);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=100).contains(&page_size) {
            return Err("Page size must be between 1 and 100".to_string());
        }

        // Widen before multiplying; the product can exceed u32.
        let offset = (i64::from(page) - 1) * i64::from(page_size);
        let limit = i64::from(page_size);

        Ok((page, page_size, offset, limit))
    }

    pub fn filter(&self) -> LinkFilter {
        LinkFilter {
            is_active: self.is_active,
            is_valid: self.is_valid,
        }
    }
}
