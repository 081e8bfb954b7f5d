//! DTOs for click statistics endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::repositories::{LinkClickStats, StatsOrder};

/// Sort window for the top-links query.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Hour,
    Day,
    #[default]
    All,
}

impl From<SortBy> for StatsOrder {
    fn from(sort_by: SortBy) -> Self {
        match sort_by {
            SortBy::Hour => StatsOrder::LastHour,
            SortBy::Day => StatsOrder::LastDay,
            SortBy::All => StatsOrder::AllTime,
        }
    }
}

/// Query parameters for `GET /api/stats`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub top: Option<i64>,

    #[serde(default)]
    pub sort_by: SortBy,
}

/// Click aggregates for one link.
#[derive(Debug, Serialize)]
pub struct StatsItem {
    pub orig_url: String,
    pub short_url: String,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
    pub all_clicks: i64,
}

impl StatsItem {
    pub fn from_stats(stats: LinkClickStats, base_url: &str) -> Self {
        Self {
            short_url: format!("{}/{}", base_url, stats.short_id),
            orig_url: stats.orig_url,
            last_hour_clicks: stats.last_hour_clicks,
            last_day_clicks: stats.last_day_clicks,
            all_clicks: stats.all_clicks,
        }
    }
}

/// Response for the top-links listing.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub items: Vec<StatsItem>,
}
