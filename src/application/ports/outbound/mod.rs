//! Outbound ports - Interfaces that the application requires from external systems

mod creature_repository_port;

pub use creature_repository_port::{CreatureRepositoryPort, RepositoryError};
#[cfg(test)]
pub use creature_repository_port::MockCreatureRepositoryPort;
