//! Strongly-typed identifiers for domain entities

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Opaque 128-bit creature identity, compared by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(Uuid);

impl CreatureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse the canonical textual form (hyphenated or simple UUID)
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(text)
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("{text}: {e}")))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The all-zero identifier, used as the "no identity assigned" marker
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CreatureId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for CreatureId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<CreatureId> for Uuid {
    fn from(id: CreatureId) -> Uuid {
        id.0
    }
}
