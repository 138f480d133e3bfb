//! Row-shaped creature record and its mapping to and from the aggregate
//!
//! Column conventions of the `creatures` table:
//! - `armor_class`, `maximum_hp` and `walking_speed` use 0 for "not recorded"
//! - `flying_speed` is the only nullable speed column
//! - swimming, climbing and burrowing speeds have no column and are not stored

use chrono::{DateTime, Utc};

use crate::domain::entities::Creature;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{ArmorClass, CreatureId, HitPoints, Speed, SpeedType};

/// One row of the `creatures` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CreatureRecord {
    pub id: String,
    pub creature_type: String,
    pub armor_class: i32,
    pub current_hp: i32,
    pub maximum_hp: i32,
    pub walking_speed: i32,
    pub flying_speed: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CreatureRecord {
    /// Empty record for an id, both timestamps stamped with `now`
    pub fn new(id: CreatureId, now: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            creature_type: String::new(),
            armor_class: 0,
            current_hp: 0,
            maximum_hp: 0,
            walking_speed: 0,
            flying_speed: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Map an aggregate onto a fresh record stamped with `now`
    pub fn from_creature(creature: &Creature, now: DateTime<Utc>) -> Self {
        let mut record = Self::new(creature.id(), now);
        record.creature_type = creature.creature_type().to_string();

        if let Some(ac) = creature.armor_class() {
            record.armor_class = ac.value();
        }
        if let Some(hp) = creature.hit_points() {
            record.current_hp = hp.current();
            record.maximum_hp = hp.maximum();
        }
        if let Some(walking) = creature.speed(SpeedType::Walking) {
            record.walking_speed = walking.value();
        }
        record.flying_speed = creature.speed(SpeedType::Flying).map(|s| s.value());

        record
    }

    /// Rebuild the aggregate.
    ///
    /// Zero armor class, zero maximum hit points and zero walking speed read
    /// back as unset. A hit point deficit is replayed as damage so the
    /// `current <= maximum` clamp applies.
    ///
    /// # Errors
    ///
    /// Fails when the row holds values no aggregate could have produced
    /// (bad id, unknown type, out-of-range numbers).
    pub fn into_creature(self) -> Result<Creature, DomainError> {
        let id = CreatureId::parse(&self.id)?;
        let mut creature = Creature::with_type(id, self.creature_type.parse()?);

        if self.armor_class > 0 {
            creature.set_armor_class(ArmorClass::new(self.armor_class)?);
        }

        if self.maximum_hp > 0 {
            let mut hit_points = HitPoints::new(self.maximum_hp)?;
            if self.current_hp < self.maximum_hp {
                let deficit = i64::from(self.maximum_hp) - i64::from(self.current_hp);
                hit_points.take_damage(u32::try_from(deficit).unwrap_or(u32::MAX));
            }
            creature.set_hit_points(hit_points);
        }

        if self.walking_speed > 0 {
            creature.add_speed(SpeedType::Walking, Speed::new(self.walking_speed)?);
        }

        if let Some(flying) = self.flying_speed.filter(|v| *v > 0) {
            creature.add_speed(SpeedType::Flying, Speed::new(flying)?);
        }

        Ok(creature)
    }
}
