//! API route configuration.

use crate::api::handlers::{
    create_link_handler, deactivate_link_handler, health_handler, list_links_handler,
    register_user_handler, stats_handler, stats_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `GET   /health`                         - Health check
/// - `POST  /users`                          - Register a new user
/// - `POST  /links`                          - Create a short link
/// - `GET   /links`                          - List links (paginated)
/// - `PATCH /links/{short_id}/deactivate`    - Deactivate a link
/// - `GET   /stats`                          - Top links by click count
/// - `GET   /stats/{short_id}`               - Click aggregates for one link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/users", post(register_user_handler))
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route(
            "/links/{short_id}/deactivate",
            patch(deactivate_link_handler),
        )
        .route("/stats", get(stats_list_handler))
        .route("/stats/{short_id}", get(stats_handler))
}
