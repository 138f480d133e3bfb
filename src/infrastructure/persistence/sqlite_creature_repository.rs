use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::CreatureRecord;
use crate::application::ports::outbound::{CreatureRepositoryPort, RepositoryError};
use crate::domain::entities::Creature;
use crate::domain::value_objects::CreatureId;

const SELECT_COLUMNS: &str = "SELECT id, creature_type, armor_class, current_hp, maximum_hp, \
     walking_speed, flying_speed, created_at, updated_at FROM creatures";

/// SQLite-backed creature repository, one statement per operation
pub struct SqliteCreatureRepository {
    pool: SqlitePool,
}

impl SqliteCreatureRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        // Create table if not exists
        sqlx::query(r#"
            CREATE TABLE IF NOT EXISTS creatures (
                id TEXT PRIMARY KEY,
                creature_type TEXT NOT NULL,
                armor_class INTEGER NOT NULL DEFAULT 0,
                current_hp INTEGER NOT NULL DEFAULT 0,
                maximum_hp INTEGER NOT NULL DEFAULT 0,
                walking_speed INTEGER NOT NULL DEFAULT 0,
                flying_speed INTEGER,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )
        "#).execute(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn into_creature(record: CreatureRecord) -> Result<Creature, RepositoryError> {
    let id = record.id.clone();
    record.into_creature().map_err(|e| {
        RepositoryError::Storage(
            anyhow::Error::new(e).context(format!("Malformed creature record {id}")),
        )
    })
}

#[async_trait]
impl CreatureRepositoryPort for SqliteCreatureRepository {
    async fn save(&self, creature: &Creature) -> Result<(), RepositoryError> {
        let record = CreatureRecord::from_creature(creature, Utc::now());

        sqlx::query(r#"
            INSERT INTO creatures (id, creature_type, armor_class, current_hp, maximum_hp,
                                   walking_speed, flying_speed, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                creature_type = excluded.creature_type,
                armor_class = excluded.armor_class,
                current_hp = excluded.current_hp,
                maximum_hp = excluded.maximum_hp,
                walking_speed = excluded.walking_speed,
                flying_speed = excluded.flying_speed,
                updated_at = excluded.updated_at
        "#)
        .bind(record.id.as_str())
        .bind(record.creature_type.as_str())
        .bind(record.armor_class)
        .bind(record.current_hp)
        .bind(record.maximum_hp)
        .bind(record.walking_speed)
        .bind(record.flying_speed)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        tracing::debug!("Saved creature: {}", record.id);
        Ok(())
    }

    async fn find_by_id(&self, id: CreatureId) -> Result<Creature, RepositoryError> {
        let record: Option<CreatureRecord> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?"))
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(RepositoryError::storage)?;

        match record {
            Some(record) => into_creature(record),
            None => Err(RepositoryError::NotFound(id)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Creature>, RepositoryError> {
        let records: Vec<CreatureRecord> = sqlx::query_as(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        records.into_iter().map(into_creature).collect()
    }

    async fn delete(&self, id: CreatureId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM creatures WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        tracing::debug!("Deleted creature: {} ({} rows)", id, result.rows_affected());
        Ok(())
    }
}
