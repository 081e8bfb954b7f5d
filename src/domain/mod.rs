//! Domain layer containing business entities and data-access contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP layer; business rules such
//! as redirect resolution live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
