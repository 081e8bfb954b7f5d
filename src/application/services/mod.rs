//! Application services orchestrating domain operations.

pub mod link_service;
pub mod stats_service;
pub mod user_service;

pub use link_service::{DEFAULT_EXPIRE_SECONDS, LinkService, ResolveOutcome};
pub use stats_service::StatsService;
pub use user_service::UserService;
