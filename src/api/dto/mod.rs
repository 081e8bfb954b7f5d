//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Error bodies are `{"detail": ...}` and come from
//! [`crate::error::AppError`].

pub mod health;
pub mod link;
pub mod stats;
pub mod user;
