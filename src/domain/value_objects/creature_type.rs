//! Creature type - closed classification of creatures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CreatureType {
    Beast,
    #[default]
    Humanoid,
    Dragon,
    Undead,
    Fiend,
    Celestial,
}

impl CreatureType {
    pub const ALL: [CreatureType; 6] = [
        CreatureType::Beast,
        CreatureType::Humanoid,
        CreatureType::Dragon,
        CreatureType::Undead,
        CreatureType::Fiend,
        CreatureType::Celestial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreatureType::Beast => "BEAST",
            CreatureType::Humanoid => "HUMANOID",
            CreatureType::Dragon => "DRAGON",
            CreatureType::Undead => "UNDEAD",
            CreatureType::Fiend => "FIEND",
            CreatureType::Celestial => "CELESTIAL",
        }
    }

    /// Check untrusted text before it is turned into a domain value
    pub fn is_valid(text: &str) -> bool {
        text.parse::<CreatureType>().is_ok()
    }
}

impl fmt::Display for CreatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreatureType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CreatureType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::unknown_variant("creature type", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_humanoid() {
        assert_eq!(CreatureType::default(), CreatureType::Humanoid);
    }

    #[test]
    fn test_parse_accepts_only_canonical_names() {
        for t in CreatureType::ALL {
            assert_eq!(t.to_string().parse::<CreatureType>().unwrap(), t);
        }
        assert!(CreatureType::is_valid("DRAGON"));
        assert!(!CreatureType::is_valid("Dragon"));
        assert!(!CreatureType::is_valid("ABERRATION"));
        assert!(!CreatureType::is_valid(""));
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&CreatureType::Celestial).unwrap();
        assert_eq!(json, "\"CELESTIAL\"");
        let parsed: CreatureType = serde_json::from_str("\"FIEND\"").unwrap();
        assert_eq!(parsed, CreatureType::Fiend);
    }
}
