//! Creature store factory - picks the repository adapter named in configuration

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use super::{InMemoryCreatureRepository, SqliteCreatureRepository};
use crate::application::ports::outbound::CreatureRepositoryPort;
use crate::infrastructure::config::{StoreBackend, StoreConfig};

/// Filesystem path named by a `sqlite:` URL, `None` for in-memory databases
fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(Path::new(path))
}

pub struct CreatureStoreFactory {
    config: StoreConfig,
}

impl CreatureStoreFactory {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Connect (for SQLite) and return the configured adapter behind the port
    pub async fn create(&self) -> Result<Arc<dyn CreatureRepositoryPort>> {
        match self.config.backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory creature store");
                Ok(Arc::new(InMemoryCreatureRepository::new()))
            }
            StoreBackend::Sqlite => {
                // Ensure data directory exists
                if let Some(parent) = sqlite_file_path(&self.config.database_url)
                    .and_then(Path::parent)
                    .filter(|p| !p.as_os_str().is_empty())
                {
                    std::fs::create_dir_all(parent)
                        .context("Failed to create creature database directory")?;
                }

                let pool = SqlitePool::connect(&self.config.database_url)
                    .await
                    .context("Failed to connect to SQLite creature database")?;
                tracing::info!("Connected to SQLite creature database: {}", self.config.database_url);
                let repository = SqliteCreatureRepository::new(pool)
                    .await
                    .context("Failed to initialize creatures table")?;
                Ok(Arc::new(repository))
            }
        }
    }
}
