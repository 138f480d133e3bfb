//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

const MIN_HASH_COST: u32 = 4;
const MAX_HASH_COST: u32 = 31;

/// Which adapter backs the creature repository port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => bail!("Unsupported creature store backend: {}", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// sqlx connection string, only read by the SQLite backend
    pub database_url: String,
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    /// bcrypt work factor for opaque data hashing
    pub hash_cost: u32,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = lookup("CREATURE_STORE_BACKEND")
            .unwrap_or_else(|| "sqlite".to_string())
            .parse::<StoreBackend>()
            .context("CREATURE_STORE_BACKEND must be 'sqlite' or 'memory'")?;

        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite:data/creatures.db?mode=rwc".to_string());

        let hash_cost = match lookup("HASH_COST") {
            Some(raw) => raw
                .parse::<u32>()
                .context("HASH_COST must be a positive integer")?,
            None => bcrypt::DEFAULT_COST,
        };
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&hash_cost) {
            bail!(
                "HASH_COST must be between {} and {}, got {}",
                MIN_HASH_COST,
                MAX_HASH_COST,
                hash_cost
            );
        }

        Ok(Self {
            store: StoreConfig {
                backend,
                database_url,
            },
            hash_cost,
        })
    }
}
