//! Persistence adapters
//!
//! Implementations of the creature repository port over a row-shaped record.

mod creature_record;
mod factory;
mod memory_creature_repository;
mod sqlite_creature_repository;

pub(crate) use creature_record::CreatureRecord;
pub use factory::CreatureStoreFactory;
pub use memory_creature_repository::InMemoryCreatureRepository;
pub use sqlite_creature_repository::SqliteCreatureRepository;
