use std::sync::Arc;

use crate::application::services::{LinkService, StatsService, UserService};

/// Shared application state injected into all handlers.
///
/// Everything here is read-only after startup; per-request work goes through
/// the services, which borrow connections from the pool as needed.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub user_service: Arc<UserService>,
    pub stats_service: Arc<StatsService>,
    /// Frontend origin for error-page redirects, trailing slash stripped at startup.
    pub frontend_url: Arc<str>,
    /// Public origin short links are served from, used to build `short_url`.
    pub base_url: Arc<str>,
}
