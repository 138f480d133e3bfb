//! Hit points value object
//!
//! `0 <= current <= maximum` holds after construction and after every damage
//! or healing step. Both are clamped rather than rejected.

use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HitPoints {
    current: i32,
    maximum: i32,
}

impl HitPoints {
    /// Full hit points at the given maximum.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` when `maximum <= 0`.
    pub fn new(maximum: i32) -> Result<Self, DomainError> {
        if maximum <= 0 {
            return Err(DomainError::out_of_range(
                "maximum hit points",
                "positive",
                maximum,
            ));
        }
        Ok(Self {
            current: maximum,
            maximum,
        })
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Reduce current hit points, stopping at zero
    pub fn take_damage(&mut self, amount: u32) {
        let remaining = i64::from(self.current) - i64::from(amount);
        self.current = remaining.max(0) as i32;
    }

    /// Restore current hit points, stopping at the maximum
    pub fn heal(&mut self, amount: u32) {
        let restored = i64::from(self.current) + i64::from(amount);
        self.current = restored.min(i64::from(self.maximum)) as i32;
    }
}

impl fmt::Display for HitPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_full_health() {
        for maximum in [1, 7, 20, 500, i32::MAX] {
            let hp = HitPoints::new(maximum).unwrap();
            assert_eq!(hp.current(), maximum);
            assert_eq!(hp.maximum(), maximum);
        }
    }

    #[test]
    fn test_non_positive_maximum_is_rejected() {
        for maximum in [0, -1, i32::MIN] {
            assert!(HitPoints::new(maximum).is_err());
        }
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut hp = HitPoints::new(20).unwrap();
        hp.take_damage(7);
        assert_eq!(hp.current(), 13);
        hp.take_damage(100);
        assert_eq!(hp.current(), 0);
        assert!(!hp.is_alive());
        hp.take_damage(u32::MAX);
        assert_eq!(hp.current(), 0);
    }

    #[test]
    fn test_damage_matches_saturating_subtraction() {
        for start_damage in [0u32, 3, 10] {
            for d in [0u32, 1, 5, 9, 10, 11, 1000] {
                let mut hp = HitPoints::new(10).unwrap();
                hp.take_damage(start_damage);
                let old = hp.current();
                hp.take_damage(d);
                assert_eq!(i64::from(hp.current()), (i64::from(old) - i64::from(d)).max(0));
                assert!(hp.current() >= 0 && hp.current() <= hp.maximum());
            }
        }
    }

    #[test]
    fn test_heal_clamps_at_maximum() {
        let mut hp = HitPoints::new(20).unwrap();
        hp.take_damage(15);
        hp.heal(4);
        assert_eq!(hp.current(), 9);
        hp.heal(u32::MAX);
        assert_eq!(hp.current(), 20);
    }

    #[test]
    fn test_heal_brings_back_from_zero() {
        let mut hp = HitPoints::new(8).unwrap();
        hp.take_damage(8);
        assert!(!hp.is_alive());
        hp.heal(1);
        assert!(hp.is_alive());
    }

    #[test]
    fn test_display() {
        let mut hp = HitPoints::new(20).unwrap();
        hp.take_damage(5);
        assert_eq!(hp.to_string(), "15/20");
    }
}
