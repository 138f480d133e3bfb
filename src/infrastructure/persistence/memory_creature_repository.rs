//! In-memory creature repository
//!
//! Keeps the same row shape as the SQLite adapter so the mapping rules (zero as
//! unset, dropped speed columns, preserved `created_at`) behave identically.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::CreatureRecord;
use crate::application::ports::outbound::{CreatureRepositoryPort, RepositoryError};
use crate::domain::entities::Creature;
use crate::domain::value_objects::CreatureId;

#[derive(Default)]
pub struct InMemoryCreatureRepository {
    records: RwLock<HashMap<CreatureId, CreatureRecord>>,
}

impl InMemoryCreatureRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn record(&self, id: CreatureId) -> Option<CreatureRecord> {
        self.records.read().await.get(&id).cloned()
    }
}

fn into_creature(record: CreatureRecord) -> Result<Creature, RepositoryError> {
    record.into_creature().map_err(RepositoryError::storage)
}

#[async_trait]
impl CreatureRepositoryPort for InMemoryCreatureRepository {
    async fn save(&self, creature: &Creature) -> Result<(), RepositoryError> {
        let mut record = CreatureRecord::from_creature(creature, Utc::now());
        let mut records = self.records.write().await;
        if let Some(existing) = records.get(&creature.id()) {
            record.created_at = existing.created_at;
        }
        records.insert(creature.id(), record);
        tracing::debug!("Saved creature in memory: {}", creature.id());
        Ok(())
    }

    async fn find_by_id(&self, id: CreatureId) -> Result<Creature, RepositoryError> {
        match self.record(id).await {
            Some(record) => into_creature(record),
            None => Err(RepositoryError::NotFound(id)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Creature>, RepositoryError> {
        let records: Vec<CreatureRecord> = self.records.read().await.values().cloned().collect();
        records.into_iter().map(into_creature).collect()
    }

    async fn delete(&self, id: CreatureId) -> Result<(), RepositoryError> {
        self.records.write().await.remove(&id);
        tracing::debug!("Deleted creature from memory: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ArmorClass, CreatureType, HitPoints};

    #[tokio::test]
    async fn test_empty_store() {
        let repo = InMemoryCreatureRepository::new();
        let id = CreatureId::new();
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(matches!(
            repo.find_by_id(id).await,
            Err(RepositoryError::NotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn test_resave_keeps_created_at() {
        let repo = InMemoryCreatureRepository::new();
        let mut creature = Creature::with_type(CreatureId::new(), CreatureType::Undead)
            .with_hit_points(HitPoints::new(13).unwrap());

        repo.save(&creature).await.unwrap();
        let first = repo.record(creature.id()).await.unwrap();
        assert_eq!(first.created_at, first.updated_at);

        creature.take_damage(3);
        repo.save(&creature).await.unwrap();
        let second = repo.record(creature.id()).await.unwrap();
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(second.current_hp, 10);
    }

    #[tokio::test]
    async fn test_applies_zero_as_unset_mapping() {
        let repo = InMemoryCreatureRepository::new();
        let creature = Creature::new(CreatureId::new()).with_armor_class(ArmorClass::new(0).unwrap());

        repo.save(&creature).await.unwrap();
        let found = repo.find_by_id(creature.id()).await.unwrap();
        assert!(found.armor_class().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_succeeds() {
        let repo = InMemoryCreatureRepository::new();
        let id = CreatureId::new();
        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap_err().is_not_found());
    }
}
