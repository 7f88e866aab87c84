//! Application layer for taskdeck.
//!
//! Owns the canonical task/category collections, the session seed data, and
//! the view configuration shared by presentation surfaces.

pub mod config;
pub mod seed;
pub mod store;

// Re-exports for convenience
pub use config::{AppConfig, CONFIG_FILE, ViewConfig};
pub use seed::{seed_store, seed_store_at};
pub use store::{StoreError, StoreEvent, TaskStore};
