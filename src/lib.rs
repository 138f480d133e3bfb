//! Cellars & Centaurs Engine - creature domain model and persistence
//!
//! - Domain: the Creature aggregate and its validated value objects
//! - Application: the repository port and the creature service
//! - Infrastructure: SQLite and in-memory adapters, configuration, wiring

pub mod application;
pub mod domain;
pub mod infrastructure;
