//! Creature repository port - persistence contract for the Creature aggregate
//!
//! Application services depend on this trait, not on a concrete store.

use async_trait::async_trait;

use crate::domain::entities::Creature;
use crate::domain::value_objects::CreatureId;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No stored creature has the requested id
    #[error("no creature found with id: {0}")]
    NotFound(CreatureId),
    /// Any failure of the backing store, passed through unchanged
    #[error("Storage error: {0}")]
    Storage(#[source] anyhow::Error),
}

impl RepositoryError {
    pub fn storage(err: impl Into<anyhow::Error>) -> Self {
        Self::Storage(err.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Repository port for Creature aggregate operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatureRepositoryPort: Send + Sync {
    /// Insert or overwrite the record keyed by the creature's id
    async fn save(&self, creature: &Creature) -> Result<(), RepositoryError>;

    /// Fails with `RepositoryError::NotFound` when no record matches
    async fn find_by_id(&self, id: CreatureId) -> Result<Creature, RepositoryError>;

    /// Every stored creature, in no particular order
    async fn find_all(&self) -> Result<Vec<Creature>, RepositoryError>;

    /// Deleting an absent id is not an error
    async fn delete(&self, id: CreatureId) -> Result<(), RepositoryError>;
}
