//! Armor class value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

pub const MIN_ARMOR_CLASS: i32 = 0;
pub const MAX_ARMOR_CLASS: i32 = 30;

/// A validated armor class in `[0, 30]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ArmorClass(i32);

impl ArmorClass {
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` when `value` is outside `[0, 30]`.
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if !(MIN_ARMOR_CLASS..=MAX_ARMOR_CLASS).contains(&value) {
            return Err(DomainError::out_of_range(
                "armor class",
                "between 0 and 30",
                value,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ArmorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AC {}", self.0)
    }
}

impl TryFrom<i32> for ArmorClass {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ArmorClass> for i32 {
    fn from(ac: ArmorClass) -> i32 {
        ac.0
    }
}
