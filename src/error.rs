//! Application error types and HTTP response mapping.
//!
//! Expected redirect outcomes (not-found / inactive / expired) are *not*
//! errors; they are modeled as [`crate::application::services::ResolveOutcome`]
//! variants and never pass through this module.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error body: `{"detail": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-facing validation-style failure, mapped to 400.
    #[error("{0}")]
    BadRequest(String),

    /// Missing resource, mapped to 404.
    #[error("{0}")]
    NotFound(String),

    /// Database failure. Integrity violations are exposed to the client as
    /// 400 with the underlying message; anything else becomes an opaque 500.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal failure, mapped to an opaque 500.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::BadRequest(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Database(e) => match integrity_violation_message(&e) {
                Some(message) => (
                    StatusCode::BAD_REQUEST,
                    format!("Database integrity error: {message}"),
                ),
                None => {
                    tracing::error!(error = %e, "database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            AppError::Internal(message) => {
                tracing::error!(error = %message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Returns the database message for constraint violations.
///
/// Unique, foreign-key, and check violations surface to the client as 400
/// with the raw database message. Low-stakes service, permissive on purpose.
fn integrity_violation_message(e: &sqlx::Error) -> Option<String> {
    let db = e.as_database_error()?;

    if db.is_unique_violation() || db.is_foreign_key_violation() || db.is_check_violation() {
        Some(db.message().to_string())
    } else {
        None
    }
}

/// Failure to persist a click event.
///
/// Deliberately separate from [`AppError`]: the single call site in the
/// redirect handler logs and discards it, and it never reaches the client.
#[derive(Debug, Error)]
#[error("click log write failed: {0}")]
pub struct ClickLogError(#[from] pub sqlx::Error);
