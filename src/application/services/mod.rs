//! Application services orchestrating domain logic.

pub mod config_service;

pub use config_service::{ConfigService, MissReason, Resolution};
