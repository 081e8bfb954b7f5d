//! Handlers for click statistics.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::stats::{StatsItem, StatsListResponse, StatsParams};
use crate::error::AppError;
use crate::state::AppState;

/// Returns click aggregates for the most-clicked links.
///
/// # Endpoint
///
/// `GET /api/stats?top&sort_by` with `sort_by` one of `hour`, `day`, `all`
/// (default `all`) and `top` defaulting to 100.
pub async fn stats_list_handler(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> Result<Json<StatsListResponse>, AppError> {
    let stats = state
        .stats_service
        .top_links(params.sort_by.into(), params.top)
        .await?;

    Ok(Json(StatsListResponse {
        items: stats
            .into_iter()
            .map(|s| StatsItem::from_stats(s, &state.base_url))
            .collect(),
    }))
}

/// Returns click aggregates for a single link.
///
/// # Endpoint
///
/// `GET /api/stats/{short_id}`
///
/// # Responses
///
/// - **200 OK** with the aggregates
/// - **404 Not Found** with `{detail}` for an unknown short id
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<StatsItem>, AppError> {
    let stats = state.stats_service.link_stats(&short_id).await?;

    Ok(Json(StatsItem::from_stats(stats, &state.base_url)))
}
