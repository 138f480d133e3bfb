//! Application services - Use case implementations
//!
//! Each service accepts port trait objects and returns domain entities.

pub mod creature_service;

pub use creature_service::{CreatureService, CreatureServiceImpl, HashingError};
