//! Configuration repository implementations.
//!
//! Concrete implementations of the domain repository trait. The backend is
//! chosen once at startup (see [`crate::server`]); handlers and services
//! only ever see the trait object.
//!
//! # Repositories
//!
//! - [`SupabaseConfigRepository`] - durable backend (Supabase PostgreSQL via SQLx)
//! - [`MemoryConfigRepository`] - process-local fallback

pub mod memory_config_repository;
pub mod supabase_config_repository;

pub use memory_config_repository::MemoryConfigRepository;
pub use supabase_config_repository::SupabaseConfigRepository;
