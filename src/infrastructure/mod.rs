//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: SQLite and in-memory creature repositories
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod persistence;
pub mod state;
