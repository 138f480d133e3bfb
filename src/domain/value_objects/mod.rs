//! Value objects - Immutable objects defined by their attributes

mod armor_class;
mod creature_type;
mod hit_points;
mod ids;
mod speed;

pub use armor_class::{ArmorClass, MAX_ARMOR_CLASS, MIN_ARMOR_CLASS};
pub use creature_type::CreatureType;
pub use hit_points::HitPoints;
pub use ids::*;
pub use speed::{Speed, SpeedType, SPEED_UNIT};
