//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod stats;
pub mod users;

pub use health::health_handler;
pub use links::{create_link_handler, deactivate_link_handler, list_links_handler};
pub use redirect::redirect_handler;
pub use stats::{stats_handler, stats_list_handler};
pub use users::register_user_handler;
