//! Movement speed value object and the closed set of movement modes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

pub const SPEED_UNIT: &str = "feet";

/// Non-negative movement speed in feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Speed {
    value: i32,
}

impl Speed {
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` when `value` is negative.
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if value < 0 {
            return Err(DomainError::out_of_range("speed", "non-negative", value));
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn unit(&self) -> &'static str {
        SPEED_UNIT
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, SPEED_UNIT)
    }
}

/// Movement mode a speed applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpeedType {
    Walking,
    Flying,
    Swimming,
    Climbing,
    Burrowing,
}

impl SpeedType {
    pub const ALL: [SpeedType; 5] = [
        SpeedType::Walking,
        SpeedType::Flying,
        SpeedType::Swimming,
        SpeedType::Climbing,
        SpeedType::Burrowing,
    ];

    /// Slot of this mode in fixed-size per-mode tables
    pub(crate) fn index(self) -> usize {
        match self {
            SpeedType::Walking => 0,
            SpeedType::Flying => 1,
            SpeedType::Swimming => 2,
            SpeedType::Climbing => 3,
            SpeedType::Burrowing => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedType::Walking => "WALKING",
            SpeedType::Flying => "FLYING",
            SpeedType::Swimming => "SWIMMING",
            SpeedType::Climbing => "CLIMBING",
            SpeedType::Burrowing => "BURROWING",
        }
    }

    pub fn is_valid(text: &str) -> bool {
        text.parse::<SpeedType>().is_ok()
    }
}

impl fmt::Display for SpeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeedType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpeedType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::unknown_variant("speed type", s))
    }
}
