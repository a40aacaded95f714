//! Best-fit position from current ratings
//!
//! Five linear scores, one per primary position, plus three hybrids that
//! average two neighbours. The highest score wins; on an exact tie the entry
//! listed first in [`SCORING_ORDER`] is kept, which puts hybrids ahead of
//! their primaries.

use crate::models::{Attribute, Position, RatingPresets};

type Weights = &'static [(Attribute, f64)];

const POINT_GUARD: Weights = &[
    (Attribute::BallHandle, 0.20),
    (Attribute::PassAccuracy, 0.20),
    (Attribute::PassVision, 0.15),
    (Attribute::Speed, 0.15),
    (Attribute::ThreePointShot, 0.10),
    (Attribute::PerimeterDefense, 0.10),
    (Attribute::SpeedWithBall, 0.10),
];

const SHOOTING_GUARD: Weights = &[
    (Attribute::ThreePointShot, 0.20),
    (Attribute::MidRangeShot, 0.20),
    (Attribute::OffensiveConsistency, 0.10),
    (Attribute::Speed, 0.10),
    (Attribute::BallHandle, 0.10),
    (Attribute::PerimeterDefense, 0.15),
    (Attribute::Agility, 0.15),
];

const SMALL_FORWARD: Weights = &[
    (Attribute::MidRangeShot, 0.15),
    (Attribute::Layup, 0.15),
    (Attribute::DrivingDunk, 0.10),
    (Attribute::Vertical, 0.10),
    (Attribute::PerimeterDefense, 0.15),
    (Attribute::HeightRating, 0.15),
    (Attribute::Strength, 0.10),
    (Attribute::DefensiveRebound, 0.10),
];

const POWER_FORWARD: Weights = &[
    (Attribute::HeightRating, 0.20),
    (Attribute::Strength, 0.15),
    (Attribute::PostControl, 0.15),
    (Attribute::InteriorDefense, 0.15),
    (Attribute::DefensiveRebound, 0.15),
    (Attribute::OffensiveRebound, 0.10),
    (Attribute::StandingDunk, 0.10),
];

const CENTER: Weights = &[
    (Attribute::HeightRating, 0.30),
    (Attribute::Block, 0.15),
    (Attribute::InteriorDefense, 0.15),
    (Attribute::OffensiveRebound, 0.10),
    (Attribute::DefensiveRebound, 0.15),
    (Attribute::StandingDunk, 0.10),
    (Attribute::Strength, 0.05),
];

/// Tie-break order.
pub const SCORING_ORDER: [Position; 8] = [
    Position::Guard,
    Position::GuardForward,
    Position::ForwardCenter,
    Position::PointGuard,
    Position::ShootingGuard,
    Position::SmallForward,
    Position::PowerForward,
    Position::Center,
];

#[derive(Debug)]
pub struct PositionCalculator;

impl PositionCalculator {
    pub fn compute(ratings: &RatingPresets) -> Position {
        let mut best = SCORING_ORDER[0];
        let mut best_score = f64::MIN;
        for (position, score) in Self::scores(ratings) {
            if score > best_score {
                best = position;
                best_score = score;
            }
        }
        best
    }

    /// Every position with its score, in tie-break order.
    pub fn scores(ratings: &RatingPresets) -> [(Position, f64); 8] {
        let pg = weighted(ratings, POINT_GUARD);
        let sg = weighted(ratings, SHOOTING_GUARD);
        let sf = weighted(ratings, SMALL_FORWARD);
        let pf = weighted(ratings, POWER_FORWARD);
        let c = weighted(ratings, CENTER);

        SCORING_ORDER.map(|position| {
            let score = match position {
                Position::Guard => (pg + sg) / 2.0,
                Position::GuardForward => (sg + sf) / 2.0,
                Position::ForwardCenter => (pf + c) / 2.0,
                Position::PointGuard => pg,
                Position::ShootingGuard => sg,
                Position::SmallForward => sf,
                Position::PowerForward => pf,
                Position::Center => c,
            };
            (position, score)
        })
    }
}

fn weighted(ratings: &RatingPresets, weights: Weights) -> f64 {
    weights.iter().map(|(attr, w)| ratings.get(*attr) as f64 * w).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(pairs: &[(Attribute, u8)]) -> RatingPresets {
        let mut r = RatingPresets::zeroed();
        for attr in Attribute::ALL {
            r.set(attr, 40);
        }
        for (attr, v) in pairs {
            r.set(*attr, *v);
        }
        r
    }

    #[test]
    fn test_weights_do_not_exceed_one() {
        for table in [POINT_GUARD, SHOOTING_GUARD, SMALL_FORWARD, POWER_FORWARD, CENTER] {
            let total: f64 = table.iter().map(|(_, w)| w).sum();
            assert!(total <= 1.0 + 1e-9, "weights sum to {}", total);
        }
    }

    #[test]
    fn test_playmaker_is_point_guard() {
        let r = with(&[
            (Attribute::BallHandle, 90),
            (Attribute::PassAccuracy, 90),
            (Attribute::PassVision, 85),
            (Attribute::HeightRating, 10),
        ]);
        assert_eq!(PositionCalculator::compute(&r), Position::PointGuard);
    }

    #[test]
    fn test_seven_footer_is_center() {
        let r = with(&[
            (Attribute::HeightRating, 95),
            (Attribute::Block, 80),
            (Attribute::InteriorDefense, 75),
            (Attribute::BallHandle, 20),
        ]);
        assert_eq!(PositionCalculator::compute(&r), Position::Center);
    }

    #[test]
    fn test_exact_tie_picks_hybrid() {
        // Every primary scores 40, so the first hybrid wins.
        let r = with(&[]);
        assert_eq!(PositionCalculator::compute(&r), Position::Guard);
    }
}
