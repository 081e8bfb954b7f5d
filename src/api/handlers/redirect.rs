//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::application::services::ResolveOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::frontend_base_url;

/// Redirects a short id to its original URL, or to a frontend error page.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Request Flow
///
/// 1. Resolve the public frontend origin from forwarded headers (or the
///    configured default)
/// 2. Classify the short id: not found / inactive / expired / valid
/// 3. On a valid link, record one click — best-effort, a failed write is
///    logged and the redirect still happens
/// 4. Return 302 Found on every branch
///
/// # Branches
///
/// - Not found → `{frontend}/not-found`
/// - Inactive  → `{frontend}/link-inactive`
/// - Expired   → `{frontend}/link-expired`
/// - Valid     → the stored original URL, verbatim
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let frontend_base = frontend_base_url(&headers, &state.frontend_url);

    let (outcome_label, location) = match state.link_service.resolve(&short_id).await? {
        ResolveOutcome::NotFound => ("not_found", format!("{frontend_base}/not-found")),
        ResolveOutcome::Inactive => ("inactive", format!("{frontend_base}/link-inactive")),
        ResolveOutcome::Expired => ("expired", format!("{frontend_base}/link-expired")),
        ResolveOutcome::Valid(link) => {
            // The single swallow site for click-log failures: analytics must
            // never break the redirect.
            if let Err(e) = state.stats_service.log_click(link.id).await {
                metrics::counter!("clicks_dropped_total").increment(1);
                error!(link_id = link.id, error = %e, "failed to log click");
            }

            ("valid", link.orig_url)
        }
    };

    metrics::counter!("redirects_total", "outcome" => outcome_label).increment(1);

    Ok(found(&location))
}

/// Builds a 302 Found response.
///
/// Axum's `Redirect` only offers 303/307/308; the original-service contract
/// is plain 302.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
