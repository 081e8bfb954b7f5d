//! Utility functions shared across the application.
//!
//! - [`base_url`] - Frontend origin resolution from forwarded headers
//! - [`short_id`] - Short id generation
//! - [`password`] - Salted password hashing

pub mod base_url;
pub mod password;
pub mod short_id;
