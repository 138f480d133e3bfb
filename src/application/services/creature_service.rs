//! Creature Service - Application service for creature management
//!
//! Forwards persistence calls to the repository port unchanged. Invariants
//! stay with the value objects; this layer only adds the coarse `validate`
//! guard, the standard creature template and opaque data hashing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::application::ports::outbound::{CreatureRepositoryPort, RepositoryError};
use crate::domain::entities::Creature;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{
    ArmorClass, CreatureId, CreatureType, HitPoints, Speed, SpeedType,
};

/// Failure of the underlying hashing primitive
#[derive(Debug, thiserror::Error)]
pub enum HashingError {
    #[error("Hashing failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// Creature service trait defining the application use cases
#[async_trait]
pub trait CreatureService: Send + Sync {
    /// Persist a creature (insert or overwrite)
    async fn save(&self, creature: &Creature) -> Result<(), RepositoryError>;

    /// Get a creature by ID
    async fn find_by_id(&self, id: CreatureId) -> Result<Creature, RepositoryError>;

    /// List all creatures
    async fn find_all(&self) -> Result<Vec<Creature>, RepositoryError>;

    /// Delete a creature
    async fn delete(&self, id: CreatureId) -> Result<(), RepositoryError>;

    /// Build the default creature handed out to new callers (not persisted)
    fn create_standard_creature(&self) -> Result<Creature, DomainError>;

    /// Salted bcrypt hash of arbitrary text, in its `$2b$` encoded form
    fn hash_opaque_data(&self, data: &str) -> Result<String, HashingError>;

    /// Check text against a hash produced by `hash_opaque_data`
    fn verify_opaque_data(&self, data: &str, hash: &str) -> Result<bool, HashingError>;

    /// Coarse guard: rejects a creature without an assigned (non-nil) id.
    ///
    /// `CreatureType` is a closed enum, so an aggregate always carries a known
    /// type; untrusted type text is checked where it is parsed
    /// (`CreatureType::from_str` / `CreatureType::is_valid`).
    fn validate(&self, creature: &Creature) -> Result<(), DomainError>;
}

/// Default implementation of CreatureService over any repository adapter
pub struct CreatureServiceImpl {
    creatures: Arc<dyn CreatureRepositoryPort>,
    hash_cost: u32,
}

impl CreatureServiceImpl {
    pub fn new(creatures: Arc<dyn CreatureRepositoryPort>) -> Self {
        Self::with_hash_cost(creatures, bcrypt::DEFAULT_COST)
    }

    pub fn with_hash_cost(creatures: Arc<dyn CreatureRepositoryPort>, hash_cost: u32) -> Self {
        Self {
            creatures,
            hash_cost,
        }
    }
}

#[async_trait]
impl CreatureService for CreatureServiceImpl {
    #[instrument(skip(self, creature), fields(creature_id = %creature.id()))]
    async fn save(&self, creature: &Creature) -> Result<(), RepositoryError> {
        self.creatures.save(creature).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CreatureId) -> Result<Creature, RepositoryError> {
        self.creatures.find_by_id(id).await
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Creature>, RepositoryError> {
        self.creatures.find_all().await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CreatureId) -> Result<(), RepositoryError> {
        self.creatures.delete(id).await
    }

    fn create_standard_creature(&self) -> Result<Creature, DomainError> {
        let creature = Creature::with_type(CreatureId::new(), CreatureType::Humanoid)
            .with_armor_class(ArmorClass::new(10)?)
            .with_hit_points(HitPoints::new(10)?)
            .with_speed(SpeedType::Walking, Speed::new(30)?);
        debug!(creature_id = %creature.id(), "Created standard creature");
        Ok(creature)
    }

    fn hash_opaque_data(&self, data: &str) -> Result<String, HashingError> {
        Ok(bcrypt::hash(data, self.hash_cost)?)
    }

    fn verify_opaque_data(&self, data: &str, hash: &str) -> Result<bool, HashingError> {
        Ok(bcrypt::verify(data, hash)?)
    }

    fn validate(&self, creature: &Creature) -> Result<(), DomainError> {
        if creature.id().is_nil() {
            return Err(DomainError::validation("Creature has no id assigned"));
        }
        Ok(())
    }
}
