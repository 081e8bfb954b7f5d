//! Application layer: business logic behind the HTTP handlers.

pub mod services;
