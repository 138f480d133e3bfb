//! Domain layer - Core business logic with no infrastructure dependencies
//!
//! This layer contains:
//! - Entities: the Creature aggregate root
//! - Value Objects: CreatureId, ArmorClass, HitPoints, Speed and the closed
//!   CreatureType / SpeedType enumerations
//! - Domain Services: pure calculations over creatures
//! - Errors: validation failures

pub mod entities;
pub mod error;
pub mod services;
pub mod value_objects;
