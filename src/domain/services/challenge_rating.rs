//! Challenge rating - rough threat estimate derived from a creature's stats

use crate::domain::entities::Creature;
use crate::domain::value_objects::CreatureType;

const BASE_RATING: f64 = 0.5;
const PER_ARMOR_CLASS: f64 = 0.1;
const PER_MAXIMUM_HIT_POINT: f64 = 0.05;

fn type_bonus(creature_type: CreatureType) -> f64 {
    match creature_type {
        CreatureType::Dragon => 5.0,
        CreatureType::Fiend => 3.0,
        CreatureType::Undead => 2.0,
        CreatureType::Beast => 1.0,
        CreatureType::Humanoid | CreatureType::Celestial => 0.0,
    }
}

/// Unset armor class and hit points contribute nothing.
pub fn challenge_rating(creature: &Creature) -> f64 {
    let mut rating = BASE_RATING;
    if let Some(ac) = creature.armor_class() {
        rating += f64::from(ac.value()) * PER_ARMOR_CLASS;
    }
    if let Some(hp) = creature.hit_points() {
        rating += f64::from(hp.maximum()) * PER_MAXIMUM_HIT_POINT;
    }
    rating + type_bonus(creature.creature_type())
}
