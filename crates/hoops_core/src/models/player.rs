use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Archetype, Attribute, Position, RatingFactors, RatingPresets};
use crate::player::{PositionCalculator, RatingCalculator};
use crate::sampling::HeightSampler;

/// Stable player identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Random v4 id drawn from the run's generator so ids replay with the seed.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.gen();
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable snapshot of one season of a player's rating state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRatingHistory {
    pub season_year: i32,
    pub team: String,
    pub age: u8,
    pub ratings: RatingPresets,
    pub overall: u8,
    pub potential: u8,
    pub total_attributes: u32,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub country: String,
    pub archetype: Archetype,
    pub height_cm: u16,
    pub weight_kg: u16,
    pub factors: RatingFactors,
    pub age: u8,
    pub ratings: RatingPresets,
    pub potential: u8,
    history: Vec<PlayerRatingHistory>,
}

impl Player {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PlayerId,
        name: String,
        country: String,
        archetype: Archetype,
        height_cm: u16,
        weight_kg: u16,
        factors: RatingFactors,
        age: u8,
        ratings: RatingPresets,
        potential: u8,
    ) -> Self {
        Self {
            id,
            name,
            country,
            archetype,
            height_cm,
            weight_kg,
            factors,
            age,
            ratings,
            potential,
            history: Vec::new(),
        }
    }

    pub fn overall(&self) -> u8 {
        RatingCalculator::overall(&self.ratings)
    }

    pub fn position(&self) -> Position {
        PositionCalculator::compute(&self.ratings)
    }

    pub fn height_rating(&self) -> u8 {
        self.ratings.get(Attribute::HeightRating)
    }

    /// Birth height plus any growth spurts since the first snapshot.
    /// `height_cm` itself never changes.
    pub fn effective_height_cm(&self) -> f64 {
        let current = self.height_rating();
        let at_birth = self
            .history
            .first()
            .map(|h| h.ratings.get(Attribute::HeightRating))
            .unwrap_or(current);
        let grown = current.saturating_sub(at_birth);
        self.height_cm as f64 + grown as f64 * HeightSampler::rating_step_cm()
    }

    pub fn total_attributes(&self) -> u32 {
        self.ratings.total()
    }

    pub fn history(&self) -> &[PlayerRatingHistory] {
        &self.history
    }

    /// Appends the current state to the history log.
    pub fn record_snapshot(&mut self, season_year: i32, team: &str) {
        let snapshot = PlayerRatingHistory {
            season_year,
            team: team.to_string(),
            age: self.age,
            ratings: self.ratings,
            overall: self.overall(),
            potential: self.potential,
            total_attributes: self.total_attributes(),
            position: self.position(),
        };
        self.history.push(snapshot);
    }

    /// Raises Potential to Overall when it fell below.
    pub fn reconcile_potential(&mut self) {
        let overall = self.overall();
        if overall > self.potential {
            self.potential = overall;
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {}cm, OVR {} / POT {})",
            self.name,
            self.position(),
            self.age,
            self.height_cm,
            self.overall(),
            self.potential
        )
    }
}
