//! Creature aggregate - combat-relevant snapshot of one creature

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{
    ArmorClass, CreatureId, CreatureType, HitPoints, Speed, SpeedType,
};

/// One optional speed per movement mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Speeds([Option<Speed>; 5]);

impl Speeds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, speed_type: SpeedType) -> Option<Speed> {
        self.0[speed_type.index()]
    }

    /// Install the speed for a mode, returning the one it replaced
    pub fn insert(&mut self, speed_type: SpeedType, speed: Speed) -> Option<Speed> {
        self.0[speed_type.index()].replace(speed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpeedType, Speed)> + '_ {
        SpeedType::ALL
            .into_iter()
            .filter_map(|t| self.get(t).map(|speed| (t, speed)))
    }

    pub fn len(&self) -> usize {
        self.0.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A creature (aggregate root)
///
/// Identity is fixed at construction. Armor class and hit points are replaced
/// whole; speeds are replaced per movement mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creature {
    id: CreatureId,
    creature_type: CreatureType,
    armor_class: Option<ArmorClass>,
    hit_points: Option<HitPoints>,
    speeds: Speeds,
}

impl Creature {
    /// A creature of the default type (humanoid)
    pub fn new(id: CreatureId) -> Self {
        Self::with_type(id, CreatureType::default())
    }

    pub fn with_type(id: CreatureId, creature_type: CreatureType) -> Self {
        Self {
            id,
            creature_type,
            armor_class: None,
            hit_points: None,
            speeds: Speeds::new(),
        }
    }

    pub fn with_armor_class(mut self, armor_class: ArmorClass) -> Self {
        self.armor_class = Some(armor_class);
        self
    }

    pub fn with_hit_points(mut self, hit_points: HitPoints) -> Self {
        self.hit_points = Some(hit_points);
        self
    }

    pub fn with_speed(mut self, speed_type: SpeedType, speed: Speed) -> Self {
        self.speeds.insert(speed_type, speed);
        self
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub fn creature_type(&self) -> CreatureType {
        self.creature_type
    }

    pub fn armor_class(&self) -> Option<ArmorClass> {
        self.armor_class
    }

    pub fn hit_points(&self) -> Option<HitPoints> {
        self.hit_points
    }

    pub fn speeds(&self) -> &Speeds {
        &self.speeds
    }

    pub fn speed(&self, speed_type: SpeedType) -> Option<Speed> {
        self.speeds.get(speed_type)
    }

    pub fn set_armor_class(&mut self, armor_class: ArmorClass) {
        self.armor_class = Some(armor_class);
    }

    pub fn set_hit_points(&mut self, hit_points: HitPoints) {
        self.hit_points = Some(hit_points);
    }

    /// Last write for a given mode wins
    pub fn add_speed(&mut self, speed_type: SpeedType, speed: Speed) {
        self.speeds.insert(speed_type, speed);
    }

    /// No-op when no hit points are assigned
    pub fn take_damage(&mut self, amount: u32) {
        if let Some(hp) = self.hit_points.as_mut() {
            hp.take_damage(amount);
        }
    }

    /// No-op when no hit points are assigned
    pub fn heal(&mut self, amount: u32) {
        if let Some(hp) = self.hit_points.as_mut() {
            hp.heal(amount);
        }
    }

    /// A creature without hit points is not alive
    pub fn is_alive(&self) -> bool {
        self.hit_points.is_some_and(|hp| hp.is_alive())
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}\nType: {}", self.id, self.creature_type)?;
        if let Some(ac) = self.armor_class {
            write!(f, "\nArmor Class: {ac}")?;
        }
        if let Some(hp) = self.hit_points {
            write!(f, "\nHit Points: {hp}")?;
        }
        if !self.speeds.is_empty() {
            let speeds: Vec<String> = self
                .speeds
                .iter()
                .map(|(t, speed)| format!("{t}: {speed}"))
                .collect();
            write!(f, "\nSpeeds: {}", speeds.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed(v: i32) -> Speed {
        Speed::new(v).unwrap()
    }

    #[test]
    fn test_new_creature_defaults() {
        let id = CreatureId::new();
        let creature = Creature::new(id);
        assert_eq!(creature.id(), id);
        assert_eq!(creature.creature_type(), CreatureType::Humanoid);
        assert!(creature.armor_class().is_none());
        assert!(creature.hit_points().is_none());
        assert!(creature.speeds().is_empty());
    }

    #[test]
    fn test_creature_without_hit_points_is_not_alive() {
        let mut creature = Creature::new(CreatureId::new());
        assert!(!creature.is_alive());
        creature.take_damage(5);
        creature.heal(5);
        assert!(creature.hit_points().is_none());
        assert!(!creature.is_alive());
    }

    #[test]
    fn test_take_damage_until_dead() {
        let mut creature =
            Creature::new(CreatureId::new()).with_hit_points(HitPoints::new(12).unwrap());
        assert!(creature.is_alive());
        creature.take_damage(5);
        assert_eq!(creature.hit_points().unwrap().current(), 7);
        assert!(creature.is_alive());
        creature.take_damage(50);
        assert_eq!(creature.hit_points().unwrap().current(), 0);
        assert!(!creature.is_alive());
    }

    #[test]
    fn test_heal_is_capped() {
        let mut creature =
            Creature::new(CreatureId::new()).with_hit_points(HitPoints::new(12).unwrap());
        creature.take_damage(10);
        creature.heal(100);
        assert_eq!(creature.hit_points().unwrap().current(), 12);
    }

    #[test]
    fn test_set_hit_points_replaces_whole_value() {
        let mut creature =
            Creature::new(CreatureId::new()).with_hit_points(HitPoints::new(12).unwrap());
        creature.take_damage(4);
        creature.set_hit_points(HitPoints::new(30).unwrap());
        let hp = creature.hit_points().unwrap();
        assert_eq!((hp.current(), hp.maximum()), (30, 30));
    }

    #[test]
    fn test_add_speed_last_write_wins() {
        let mut creature = Creature::new(CreatureId::new());
        creature.add_speed(SpeedType::Flying, speed(30));
        creature.add_speed(SpeedType::Walking, speed(25));
        creature.add_speed(SpeedType::Flying, speed(60));
        assert_eq!(creature.speeds().len(), 2);
        assert_eq!(creature.speed(SpeedType::Flying), Some(speed(60)));
        assert_eq!(creature.speed(SpeedType::Walking), Some(speed(25)));
        assert_eq!(creature.speed(SpeedType::Swimming), None);
    }

    #[test]
    fn test_speeds_insert_replaces_per_mode() {
        let mut speeds = Speeds::new();
        assert_eq!(speeds.insert(SpeedType::Climbing, speed(20)), None);
        assert_eq!(speeds.insert(SpeedType::Climbing, speed(25)), Some(speed(20)));
        assert_eq!(speeds.len(), 1);
        assert_eq!(speeds.get(SpeedType::Climbing), Some(speed(25)));
    }

    #[test]
    fn test_display_omits_unset_attributes() {
        let id = CreatureId::new();
        let bare = Creature::with_type(id, CreatureType::Beast);
        assert_eq!(bare.to_string(), format!("ID: {id}\nType: BEAST"));

        let mut full = Creature::with_type(id, CreatureType::Dragon)
            .with_armor_class(ArmorClass::new(19).unwrap())
            .with_hit_points(HitPoints::new(200).unwrap())
            .with_speed(SpeedType::Flying, speed(80))
            .with_speed(SpeedType::Walking, speed(40));
        full.take_damage(20);
        assert_eq!(
            full.to_string(),
            format!(
                "ID: {id}\nType: DRAGON\nArmor Class: AC 19\nHit Points: 180/200\n\
                 Speeds: WALKING: 40 feet, FLYING: 80 feet"
            )
        );
    }
}
