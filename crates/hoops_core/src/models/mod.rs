//! Core data model: ratings, players, teams and box scores.

pub mod archetype;
pub mod box_score;
pub mod player;
pub mod position;
pub mod ratings;
pub mod team;

pub use archetype::Archetype;
pub use box_score::{pct, BoxScoreLine, PlayerStats, ShotType};
pub use player::{Player, PlayerId, PlayerRatingHistory};
pub use position::Position;
pub use ratings::{Attribute, RatingFactors, RatingGroup, RatingPresets};
pub use team::{averages_of, predict_score, Team, TeamAverages, MAX_ROSTER_SIZE, MIN_ROSTER_SIZE};
