//! Cellars & Centaurs Engine
//!
//! Loads configuration, opens the creature store and makes sure it holds at
//! least the standard creature. Transports are wired on top of `AppState`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cellars_engine::application::services::CreatureService;
use cellars_engine::domain::services::challenge_rating;
use cellars_engine::infrastructure::config::AppConfig;
use cellars_engine::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cellars_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cellars & Centaurs Engine");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Store: {:?}", config.store.backend);
    tracing::info!("  Database: {}", config.store.database_url);

    let state = AppState::new(config).await?;
    let service = &state.creature_service;

    let mut creatures = service.find_all().await?;
    if creatures.is_empty() {
        let creature = service.create_standard_creature()?;
        service.validate(&creature)?;
        service.save(&creature).await?;
        tracing::info!("Seeded standard creature {}", creature.id());
        creatures.push(creature);
    }

    for creature in &creatures {
        tracing::info!(
            creature_id = %creature.id(),
            creature_type = %creature.creature_type(),
            alive = creature.is_alive(),
            challenge_rating = challenge_rating(creature),
            "Stored creature"
        );
    }
    tracing::info!("{} creature(s) in store", creatures.len());

    Ok(())
}
