//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link lookup, creation, listing, deactivation
//! - [`UserRepository`] - Account storage
//! - [`StatsRepository`] - Click logging and aggregates

pub mod link_repository;
pub mod stats_repository;
pub mod user_repository;

pub use link_repository::{LinkFilter, LinkRepository};
pub use stats_repository::{LinkClickStats, StatsOrder, StatsRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
