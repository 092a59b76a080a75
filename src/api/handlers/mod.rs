//! HTTP request handlers for API endpoints.

pub mod check;
pub mod configs;
pub mod health;

pub use check::check_handler;
pub use configs::{create_config_handler, delete_config_handler, list_configs_handler};
pub use health::health_handler;
