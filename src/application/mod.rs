//! Application layer containing business logic services.
//!
//! Services coordinate domain entities and repositories; handlers in the
//! API layer call into services, never into repositories directly.

pub mod services;
