//! Handlers for link creation, listing, and deactivation.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{
    CreateLinkRequest, LinkListParams, LinkListResponse, LinkResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Responses
///
/// - **201 Created** with the link representation, including `short_url`
///   built from the configured public base
/// - **400 Bad Request** on an invalid `orig_url` or non-positive
///   `expire_seconds`
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.orig_url, payload.expire_seconds)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, &state.base_url)),
    ))
}

/// Lists links with pagination and optional activity/validity filters.
///
/// # Endpoint
///
/// `GET /api/links?page&page_size&is_active&is_valid`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<LinkListParams>,
) -> Result<Json<LinkListResponse>, AppError> {
    let (page, page_size, offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(AppError::bad_request)?;

    let (items, total_items) = state
        .link_service
        .list_links(params.filter(), offset, limit)
        .await?;

    let total_pages = if total_items == 0 {
        0
    } else {
        (total_items + limit - 1) / limit
    };

    Ok(Json(LinkListResponse {
        page,
        page_size,
        total_items,
        total_pages,
        items: items
            .into_iter()
            .map(|link| LinkResponse::from_link(link, &state.base_url))
            .collect(),
    }))
}

/// Deactivates a link; subsequent redirects land on the inactive page.
///
/// # Endpoint
///
/// `PATCH /api/links/{short_id}/deactivate`
///
/// # Responses
///
/// - **200 OK** with the updated representation (`is_active = false`)
/// - **404 Not Found** with `{detail}` for an unknown short id
pub async fn deactivate_link_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.deactivate_link(&short_id).await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}
