//! Domain services - Pure operations over domain entities

mod challenge_rating;

pub use challenge_rating::challenge_rating;
