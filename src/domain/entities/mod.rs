//! Core domain entities representing the business data model.
//!
//! Plain data structures without business logic:
//!
//! - [`Link`] - A short alias for an original URL
//! - [`User`] - A registered account
//!
//! Creation inputs are separate structs (`NewLink`, `NewUser`) carrying only
//! what storage needs; ids and defaults are assigned by the database.

pub mod link;
pub mod user;

pub use link::{Link, NewLink};
pub use user::{NewUser, User};
