//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod config_repository;

pub use config_repository::ConfigRepository;

#[cfg(test)]
pub use config_repository::MockConfigRepository;
