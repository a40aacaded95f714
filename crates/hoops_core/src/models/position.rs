use serde::{Deserialize, Serialize};
use std::fmt;

/// On-court role. Always derived from current ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
    /// PG/SG hybrid
    Guard,
    /// SG/SF hybrid
    GuardForward,
    /// PF/C hybrid
    ForwardCenter,
}

impl Position {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
            Position::Guard => "G",
            Position::GuardForward => "GF",
            Position::ForwardCenter => "FC",
        }
    }

    /// Place on the court line PG (0) .. C (4); hybrids sit between.
    pub fn slot(&self) -> f64 {
        match self {
            Position::PointGuard => 0.0,
            Position::Guard => 0.5,
            Position::ShootingGuard => 1.0,
            Position::GuardForward => 1.5,
            Position::SmallForward => 2.0,
            Position::PowerForward => 3.0,
            Position::ForwardCenter => 3.5,
            Position::Center => 4.0,
        }
    }

    /// Defender matching window: slots at most one apart.
    pub fn can_guard(&self, other: Position) -> bool {
        (self.slot() - other.slot()).abs() <= 1.0
    }

    pub fn is_frontcourt(&self) -> bool {
        matches!(self, Position::PowerForward | Position::ForwardCenter | Position::Center)
    }

    /// Shot mix multipliers `(inside, mid, three)`.
    pub fn shot_tendencies(&self) -> (f64, f64, f64) {
        match self {
            Position::PointGuard => (0.8, 1.1, 1.2),
            Position::ShootingGuard => (0.9, 1.05, 1.15),
            Position::SmallForward => (1.0, 1.0, 1.0),
            Position::PowerForward => (1.1, 0.9, 0.7),
            Position::Center => (1.2, 0.8, 0.5),
            Position::Guard => (0.85, 1.075, 1.175),
            Position::GuardForward => (0.95, 1.025, 1.075),
            Position::ForwardCenter => (1.15, 0.85, 0.6),
        }
    }

    /// Offensive rebound bonus for the shooter.
    pub fn rebound_bonus(&self) -> f64 {
        match self {
            Position::PowerForward | Position::ForwardCenter | Position::Center => 0.10,
            Position::SmallForward | Position::GuardForward => 0.05,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
