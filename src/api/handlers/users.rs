//! Handler for user registration.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::user::{RegisterUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Responses
///
/// - **201 Created** with `{id, username, is_active}` — the password and its
///   hash are never echoed
/// - **400 Bad Request** with `{detail}` on a duplicate username or other
///   creation failure
/// - **422 Unprocessable Entity** when required fields are missing (`Json`
///   extractor rejection)
pub async fn register_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .register(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
