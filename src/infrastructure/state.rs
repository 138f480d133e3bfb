//! Shared application state

use anyhow::Result;

use crate::application::services::CreatureServiceImpl;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::CreatureStoreFactory;

/// Wired services handed to whatever transport sits in front of the engine
pub struct AppState {
    pub config: AppConfig,
    pub creature_service: CreatureServiceImpl,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let creatures = CreatureStoreFactory::new(config.store.clone()).create().await?;
        let creature_service = CreatureServiceImpl::with_hash_cost(creatures, config.hash_cost);

        Ok(Self {
            config,
            creature_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::CreatureService;
    use crate::infrastructure::config::{StoreBackend, StoreConfig};

    #[tokio::test]
    async fn test_wires_service_to_configured_store() {
        let state = AppState::new(AppConfig {
            store: StoreConfig {
                backend: StoreBackend::Memory,
                database_url: String::new(),
            },
            hash_cost: 4,
        })
        .await
        .unwrap();

        let service = &state.creature_service;
        let creature = service.create_standard_creature().unwrap();
        service.save(&creature).await.unwrap();

        let found = service.find_by_id(creature.id()).await.unwrap();
        assert_eq!(found, creature);

        service.delete(creature.id()).await.unwrap();
        assert!(service.find_by_id(creature.id()).await.unwrap_err().is_not_found());
    }
}
