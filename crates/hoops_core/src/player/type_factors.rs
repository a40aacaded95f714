//! Archetype multipliers applied on top of the baselines.
//!
//! Pairs not listed here scale by 1.0.

use crate::models::{Archetype, Attribute};

#[derive(Debug)]
pub struct TypeFactors;

impl TypeFactors {
    pub fn factor(archetype: Archetype, attr: Attribute) -> f64 {
        use Attribute::*;
        match archetype {
            Archetype::Point => match attr {
                ThreePointShot => 1.4,
                MidRangeShot => 1.3,
                FreeThrow => 1.2,
                ShotIq => 1.2,
                OffensiveConsistency => 1.1,
                Speed => 1.5,
                Agility => 1.4,
                Stamina => 1.2,
                Hustle => 1.1,
                PassAccuracy => 1.5,
                BallHandle => 1.5,
                SpeedWithBall => 1.3,
                PassIq => 1.4,
                PassVision => 1.3,
                PerimeterDefense => 1.2,
                Steal => 1.1,
                _ => 1.0,
            },
            Archetype::Wing => match attr {
                ThreePointShot => 1.3,
                MidRangeShot => 1.3,
                FreeThrow => 1.1,
                ShotIq => 1.1,
                OffensiveConsistency => 1.2,
                Speed => 1.3,
                Agility => 1.3,
                Vertical => 1.2,
                Hustle => 1.2,
                Layup => 1.3,
                DrivingDunk => 1.3,
                BallHandle => 1.2,
                PassAccuracy => 1.1,
                PerimeterDefense => 1.2,
                Steal => 1.1,
                Block => 1.1,
                OffensiveRebound => 1.1,
                DefensiveRebound => 1.1,
                _ => 1.0,
            },
            Archetype::Big => match attr {
                FreeThrow => 0.9,
                ThreePointShot => 0.7,
                MidRangeShot => 0.8,
                Strength => 1.4,
                Vertical => 1.2,
                OverallDurability => 1.1,
                Layup => 1.2,
                StandingDunk => 1.4,
                DrivingDunk => 1.2,
                PostHook => 1.3,
                PostFade => 1.2,
                PostControl => 1.4,
                DrawFoul => 1.1,
                Hands => 1.1,
                InteriorDefense => 1.4,
                Block => 1.4,
                HelpDefenseIq => 1.2,
                DefensiveConsistency => 1.1,
                OffensiveRebound => 1.4,
                DefensiveRebound => 1.4,
                _ => 1.0,
            },
        }
    }

    /// Every archetype carries the same Intangibles lift.
    pub fn intangibles(_archetype: Archetype) -> f64 {
        1.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlisted_pairs_default_to_one() {
        assert_eq!(TypeFactors::factor(Archetype::Point, Attribute::Block), 1.0);
        assert_eq!(TypeFactors::factor(Archetype::Big, Attribute::Speed), 1.0);
        assert_eq!(TypeFactors::factor(Archetype::Wing, Attribute::HeightRating), 1.0);
    }

    #[test]
    fn test_bigs_favor_the_paint() {
        let big = |a| TypeFactors::factor(Archetype::Big, a);
        assert!(big(Attribute::PostControl) > big(Attribute::ThreePointShot));
        assert!(TypeFactors::factor(Archetype::Point, Attribute::BallHandle) > big(Attribute::BallHandle));
    }
}
